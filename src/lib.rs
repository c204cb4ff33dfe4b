pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::config::cli::{BuiltinContent, FileContentSource};
pub use crate::config::content_config::ContentConfig;
pub use crate::core::certifications::certifications_of;
pub use crate::core::dates::format_target_date;
pub use crate::core::engine::SkillsEngine;
pub use crate::core::roadmap::{group_roadmap, progress_for, GroupKey, RoadmapGroups};
pub use crate::core::tags::{display_tags, is_deprioritized_tag, is_hidden_tag, TagClass, TagRules};
pub use crate::core::view_filter::{filter_by_view, filter_by_view_with};
pub use crate::domain::model::{
    ContentModel, RoadmapCategory, RoadmapItem, RoadmapStatus, Skill, SkillArea, SkillLevel,
    ViewMode,
};
pub use crate::utils::error::{ContentError, Result};
