use crate::core::dates::format_target_date;
use crate::core::roadmap::{progress_for, GroupKey};
use crate::core::tags::TagRules;
use crate::domain::model::{RoadmapItem, RoadmapStatus, Skill, SkillArea, SkillLevel, ViewMode};
use serde::Serialize;

pub const KNOWN_ICONS: [&str; 5] = ["support", "networking", "os", "automation", "cloud"];
pub const DEFAULT_ICON: &str = "support";

/// Maps an icon key onto the renderer's icon set.
pub fn resolve_icon(key: &str) -> &'static str {
    KNOWN_ICONS
        .iter()
        .copied()
        .find(|icon| *icon == key)
        .unwrap_or(DEFAULT_ICON)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsPageView {
    pub view: ViewMode,
    pub view_label: &'static str,
    pub areas: Vec<AreaView>,
    pub roadmap: Vec<RoadmapGroupView>,
    pub certifications: Vec<CertificationView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: &'static str,
    pub skills: Vec<SkillRow>,
}

impl AreaView {
    pub fn new(area: &SkillArea, rules: &TagRules) -> Self {
        Self {
            id: area.id.clone(),
            title: area.title.clone(),
            description: area.description.clone(),
            icon: resolve_icon(area.icon_key()),
            skills: area
                .skills
                .iter()
                .map(|skill| SkillRow::new(skill, rules))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRow {
    pub name: String,
    pub level: SkillLevel,
    pub level_rank: u8,
    pub years: Option<f64>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
}

impl SkillRow {
    pub fn new(skill: &Skill, rules: &TagRules) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
            level_rank: skill.level.rank(),
            years: skill.years,
            notes: skill.notes.clone(),
            tags: rules
                .display_tags(skill)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapGroupView {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<RoadmapEntryView>,
}

impl RoadmapGroupView {
    pub fn new(key: GroupKey, items: &[RoadmapItem]) -> Self {
        Self {
            id: key.id(),
            label: key.label(),
            items: items.iter().map(RoadmapEntryView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapEntryView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category_label: &'static str,
    pub status: RoadmapStatus,
    pub status_label: &'static str,
    pub completed: bool,
    pub target: Option<String>,
}

impl From<&RoadmapItem> for RoadmapEntryView {
    fn from(item: &RoadmapItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            category_label: item.category.label(),
            status: item.status,
            status_label: item.status.label(),
            completed: item.status == RoadmapStatus::Completed,
            target: format_target_date(item.target_date.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: RoadmapStatus,
    pub status_pill: String,
    pub progress: f64,
}

impl From<&RoadmapItem> for CertificationView {
    fn from(item: &RoadmapItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            status: item.status,
            status_pill: item.status.pill_text(),
            progress: progress_for(item.status),
        }
    }
}
