use crate::utils::error::ContentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const MAX_RANK: u8 = 3;

    /// Number of filled dots in the level indicator.
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillArea {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "iconKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_key: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl SkillArea {
    /// Explicit icon key, falling back to the area id.
    pub fn icon_key(&self) -> &str {
        self.icon_key.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Planning,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadmapStatus::Planning => "planning",
            RoadmapStatus::InProgress => "in-progress",
            RoadmapStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::Planning => "Planning",
            RoadmapStatus::InProgress => "In progress",
            RoadmapStatus::Completed => "Completed",
        }
    }

    /// Lowercase text shown inside a status pill, e.g. "in progress".
    pub fn pill_text(self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapCategory {
    Certification,
    Lab,
    Course,
    Project,
    Other,
}

impl RoadmapCategory {
    pub fn label(self) -> &'static str {
        match self {
            RoadmapCategory::Certification => "Certification",
            RoadmapCategory::Lab => "Lab",
            RoadmapCategory::Course => "Course",
            RoadmapCategory::Project => "Project",
            RoadmapCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "targetDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_date: Option<String>,
    pub status: RoadmapStatus,
    pub category: RoadmapCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    #[serde(default)]
    pub skill_areas: Vec<SkillArea>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
}

/// Skills-matrix toggle. Owned by whoever handles the interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Job,
    All,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Job => ViewMode::All,
            ViewMode::All => ViewMode::Job,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Job => "job",
            ViewMode::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Job => "Job-focused",
            ViewMode::All => "Everything",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "job" => Ok(ViewMode::Job),
            "all" => Ok(ViewMode::All),
            _ => Err(ContentError::InvalidValueError {
                field: "view".to_string(),
                value: s.to_string(),
                reason: "Expected 'job' or 'all'".to_string(),
            }),
        }
    }
}
