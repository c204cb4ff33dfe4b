use crate::core::tags::TagRules;
use crate::domain::model::{ContentModel, RoadmapItem, SkillArea};
use crate::domain::ports::LoadedContent;
use crate::utils::error::{ContentError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_CONTENT: &str = include_str!("../../content/skills.toml");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub skill_areas: Vec<SkillArea>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
    /// Replaces the default tag classification when present.
    pub tags: Option<TagRules>,
}

impl ContentConfig {
    /// 從 TOML 檔案載入內容
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContentError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Parses content, resolving `${VAR}` through `lookup` instead of the process environment.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup);

        toml::from_str(&processed_content).map_err(|e| ContentError::ParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Content shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Replaces `${VAR}` with the looked-up value; unknown variables are left as written.
    fn substitute_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        use regex::Regex;
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_content(&self) -> Result<()> {
        validate_unique(
            "skill_areas.id",
            self.skill_areas.iter().map(|area| area.id.as_str()),
        )?;

        for area in &self.skill_areas {
            validate_non_empty_string("skill_areas.id", &area.id)?;
            validate_non_empty_string(&format!("skill_areas.{}.title", area.id), &area.title)?;
            validate_unique(
                &format!("skill_areas.{}.skills.name", area.id),
                area.skills.iter().map(|skill| skill.name.as_str()),
            )?;

            for skill in &area.skills {
                validate_non_empty_string(
                    &format!("skill_areas.{}.skills.name", area.id),
                    &skill.name,
                )?;
                if let Some(years) = skill.years {
                    validate_non_negative(
                        &format!("skill_areas.{}.skills.{}.years", area.id, skill.name),
                        years,
                    )?;
                }
            }
        }

        validate_unique("roadmap.id", self.roadmap.iter().map(|item| item.id.as_str()))?;
        for item in &self.roadmap {
            validate_non_empty_string("roadmap.id", &item.id)?;
            validate_non_empty_string(&format!("roadmap.{}.title", item.id), &item.title)?;
        }

        Ok(())
    }

    pub fn skill_count(&self) -> usize {
        self.skill_areas.iter().map(|area| area.skills.len()).sum()
    }

    pub fn into_loaded(self) -> LoadedContent {
        LoadedContent {
            model: ContentModel {
                skill_areas: self.skill_areas,
                roadmap: self.roadmap,
            },
            tag_rules: self.tags.unwrap_or_default(),
        }
    }
}

impl Validate for ContentConfig {
    fn validate(&self) -> Result<()> {
        self.validate_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RoadmapStatus, SkillLevel};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[[skill_areas]]
id = "networking"
title = "Networking & Connectivity"
iconKey = "networking"

[[skill_areas.skills]]
name = "TCP/IP fundamentals"
level = "intermediate"
years = 2
notes = "Subnetting, DNS, DHCP"
tags = ["networking", "core"]

[[roadmap]]
id = "azure-fundamentals"
title = "Microsoft Azure Fundamentals (AZ-900)"
targetDate = "2025-05-15"
status = "in-progress"
category = "certification"
"#;

    #[test]
    fn test_parse_basic_content() {
        let config = ContentConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.skill_areas.len(), 1);
        assert_eq!(config.skill_areas[0].icon_key.as_deref(), Some("networking"));
        assert_eq!(config.skill_areas[0].skills[0].level, SkillLevel::Intermediate);
        assert_eq!(config.skill_areas[0].skills[0].years, Some(2.0));
        assert_eq!(config.roadmap[0].status, RoadmapStatus::InProgress);
        assert!(config.tags.is_none());
        assert!(config.validate().is_ok());

        let loaded = config.into_loaded();
        assert_eq!(loaded.tag_rules, TagRules::default());
    }

    #[test]
    fn test_unknown_enum_values_rejected() {
        let bad_status = BASIC.replace("\"in-progress\"", "\"paused\"");
        assert!(matches!(
            ContentConfig::from_toml_str(&bad_status),
            Err(ContentError::ParseError { .. })
        ));

        let bad_level = BASIC.replace("\"intermediate\"", "\"expert\"");
        assert!(ContentConfig::from_toml_str(&bad_level).is_err());

        let bad_category = BASIC.replace("\"certification\"", "\"webinar\"");
        assert!(ContentConfig::from_toml_str(&bad_category).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let doubled = format!(
            "{}\n[[roadmap]]\nid = \"azure-fundamentals\"\ntitle = \"Again\"\nstatus = \"planning\"\ncategory = \"lab\"\n",
            BASIC
        );
        let config = ContentConfig::from_toml_str(&doubled).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContentError::DuplicateError { ref value, .. }) if value == "azure-fundamentals"
        ));
    }

    #[test]
    fn test_duplicate_skill_names_rejected() {
        let doubled = BASIC.replace(
            "[[roadmap]]",
            "[[skill_areas.skills]]\nname = \"TCP/IP fundamentals\"\nlevel = \"beginner\"\n\n[[roadmap]]",
        );
        let config = ContentConfig::from_toml_str(&doubled).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_years_rejected() {
        let config = ContentConfig::from_toml_str(&BASIC.replace("years = 2", "years = -1")).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContentError::InvalidValueError { .. })
        ));
    }

    #[test]
    fn test_custom_tag_rules() {
        let with_tags = format!("{}\n[tags.legacy]\ndeprioritized = true\n", BASIC);
        let loaded = ContentConfig::from_toml_str(&with_tags).unwrap().into_loaded();
        assert!(loaded.tag_rules.is_deprioritized("legacy"));
        assert!(!loaded.tag_rules.is_hidden("core"));
    }

    #[test]
    fn test_var_substitution() {
        let vars: HashMap<&str, &str> = [("PORTFOLIO_TARGET", "2026-02-01")].into_iter().collect();
        let lookup = |name: &str| vars.get(name).map(|v| v.to_string());

        let content = BASIC.replace("2025-05-15", "${PORTFOLIO_TARGET}");
        let config = ContentConfig::from_toml_str_with(&content, lookup).unwrap();
        assert_eq!(config.roadmap[0].target_date.as_deref(), Some("2026-02-01"));

        let unknown = BASIC.replace("2025-05-15", "${PORTFOLIO_UNKNOWN}");
        let config = ContentConfig::from_toml_str_with(&unknown, lookup).unwrap();
        assert_eq!(
            config.roadmap[0].target_date.as_deref(),
            Some("${PORTFOLIO_UNKNOWN}")
        );
    }

    #[test]
    fn test_unset_env_var_left_as_written() {
        let unset = BASIC.replace("2025-05-15", "${PORTFOLIO_SKILLS_UNSET_VAR}");
        let config = ContentConfig::from_toml_str(&unset).unwrap();
        assert_eq!(
            config.roadmap[0].target_date.as_deref(),
            Some("${PORTFOLIO_SKILLS_UNSET_VAR}")
        );
    }

    #[test]
    fn test_empty_content() {
        let config = ContentConfig::from_toml_str("").unwrap();
        assert!(config.skill_areas.is_empty());
        assert!(config.roadmap.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let config = ContentConfig::builtin().unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.skill_areas.len(), 5);
        assert_eq!(config.skill_count(), 22);
        assert_eq!(config.roadmap.len(), 6);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ContentConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.skill_areas[0].id, "networking");

        assert!(matches!(
            ContentConfig::from_file("/nonexistent/skills.toml"),
            Err(ContentError::IoError(_))
        ));
    }
}
