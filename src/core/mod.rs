pub mod certifications;
pub mod dates;
pub mod engine;
pub mod roadmap;
pub mod tags;
pub mod view_filter;
pub mod view_model;

pub use crate::domain::model::{ContentModel, RoadmapItem, Skill, SkillArea, ViewMode};
pub use crate::domain::ports::{ContentSource, LoadedContent};
pub use crate::utils::error::Result;
