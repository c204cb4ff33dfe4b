use crate::domain::model::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_DISPLAY_TAGS: usize = 4;

/// How a single tag affects rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagClass {
    /// Never rendered as a chip.
    #[serde(default)]
    pub hidden: bool,
    /// Excludes the skill from the job-focused view.
    #[serde(default)]
    pub deprioritized: bool,
}

/// Tag → classification table. Tags without an entry are unclassified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagRules {
    classes: BTreeMap<String, TagClass>,
}

impl Default for TagRules {
    fn default() -> Self {
        Self::from_iter([
            (
                "core",
                TagClass {
                    hidden: true,
                    deprioritized: false,
                },
            ),
            (
                "nice-to-have",
                TagClass {
                    hidden: true,
                    deprioritized: true,
                },
            ),
            (
                "fringe",
                TagClass {
                    hidden: false,
                    deprioritized: true,
                },
            ),
        ])
    }
}

impl<S: Into<String>> FromIterator<(S, TagClass)> for TagRules {
    fn from_iter<I: IntoIterator<Item = (S, TagClass)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(tag, class)| (tag.into(), class))
                .collect(),
        }
    }
}

impl TagRules {
    pub fn class_of(&self, tag: &str) -> TagClass {
        self.classes.get(tag).copied().unwrap_or_default()
    }

    pub fn is_hidden(&self, tag: &str) -> bool {
        self.class_of(tag).hidden
    }

    pub fn is_deprioritized(&self, tag: &str) -> bool {
        self.class_of(tag).deprioritized
    }

    /// True when any of the skill's tags keeps it out of the job view.
    pub fn is_deprioritized_skill(&self, skill: &Skill) -> bool {
        skill.tags.iter().any(|tag| self.is_deprioritized(tag))
    }

    /// Visible tags in original order, capped at [`MAX_DISPLAY_TAGS`].
    pub fn display_tags<'a>(&self, skill: &'a Skill) -> Vec<&'a str> {
        skill
            .tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !self.is_hidden(tag))
            .take(MAX_DISPLAY_TAGS)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

pub fn is_hidden_tag(tag: &str) -> bool {
    TagRules::default().is_hidden(tag)
}

pub fn is_deprioritized_tag(tag: &str) -> bool {
    TagRules::default().is_deprioritized(tag)
}

pub fn display_tags(skill: &Skill) -> Vec<&str> {
    TagRules::default().display_tags(skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SkillLevel;

    fn skill(tags: &[&str]) -> Skill {
        Skill {
            name: "Network tools".to_string(),
            level: SkillLevel::Intermediate,
            years: None,
            notes: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_classification() {
        assert!(is_hidden_tag("core"));
        assert!(is_hidden_tag("nice-to-have"));
        assert!(!is_hidden_tag("fringe"));
        assert!(!is_hidden_tag("networking"));

        assert!(is_deprioritized_tag("nice-to-have"));
        assert!(is_deprioritized_tag("fringe"));
        assert!(!is_deprioritized_tag("core"));
        assert!(!is_deprioritized_tag(""));
    }

    #[test]
    fn test_display_tags_drops_hidden_and_truncates() {
        let s = skill(&["core", "a", "nice-to-have", "b", "c", "d", "e"]);
        assert_eq!(display_tags(&s), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_display_tags_only_hidden_is_empty() {
        assert!(display_tags(&skill(&["core"])).is_empty());
        assert!(display_tags(&skill(&[])).is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let rules: TagRules = [(
            "legacy",
            TagClass {
                hidden: false,
                deprioritized: true,
            },
        )]
        .into_iter()
        .collect();

        assert!(rules.is_deprioritized_skill(&skill(&["windows", "legacy"])));
        // Defaults do not leak into custom rules.
        assert!(!rules.is_hidden("core"));
        assert_eq!(rules.display_tags(&skill(&["core", "legacy"])), vec!["core", "legacy"]);
    }

    #[test]
    fn test_rules_deserialize_from_toml() {
        let rules: TagRules = toml::from_str(
            r#"
[core]
hidden = true

[fringe]
deprioritized = true
"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.is_hidden("core"));
        assert!(!rules.is_deprioritized("core"));
        assert!(rules.is_deprioritized("fringe"));
    }
}
