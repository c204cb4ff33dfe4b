use crate::core::tags::TagRules;
use crate::domain::model::{SkillArea, ViewMode};

/// Narrows areas to what the given view renders, using the default tag rules.
pub fn filter_by_view(areas: &[SkillArea], view: ViewMode) -> Vec<SkillArea> {
    filter_by_view_with(areas, view, &TagRules::default())
}

/// `All` is the identity. `Job` drops deprioritized skills, then any area
/// left without skills. Input order is kept for both areas and skills.
pub fn filter_by_view_with(areas: &[SkillArea], view: ViewMode, rules: &TagRules) -> Vec<SkillArea> {
    match view {
        ViewMode::All => areas.to_vec(),
        ViewMode::Job => areas
            .iter()
            .filter_map(|area| {
                let skills: Vec<_> = area
                    .skills
                    .iter()
                    .filter(|skill| !rules.is_deprioritized_skill(skill))
                    .cloned()
                    .collect();

                if skills.is_empty() {
                    tracing::debug!("Dropping area '{}' from {} view", area.id, view);
                    return None;
                }

                Some(SkillArea {
                    skills,
                    ..area.clone()
                })
            })
            .collect(),
    }
}
