use crate::core::certifications::certifications_of;
use crate::core::roadmap::{group_roadmap, RoadmapGroups};
use crate::core::tags::TagRules;
use crate::core::view_filter::filter_by_view_with;
use crate::core::view_model::{AreaView, CertificationView, RoadmapGroupView, SkillsPageView};
use crate::domain::model::{ContentModel, RoadmapItem, SkillArea, ViewMode};
use crate::domain::ports::{ContentSource, LoadedContent};
use crate::utils::error::Result;

/// Owns the content for a page and derives every view from it on demand.
/// Nothing derived is cached; each call recomputes from the original content.
pub struct SkillsEngine {
    content: ContentModel,
    rules: TagRules,
}

impl SkillsEngine {
    pub fn new(content: ContentModel, rules: TagRules) -> Self {
        Self { content, rules }
    }

    pub fn from_source<S: ContentSource>(source: &S) -> Result<Self> {
        let LoadedContent { model, tag_rules } = source.load()?;
        tracing::info!(
            "Loaded {} skill areas and {} roadmap items",
            model.skill_areas.len(),
            model.roadmap.len()
        );
        Ok(Self::new(model, tag_rules))
    }

    pub fn content(&self) -> &ContentModel {
        &self.content
    }

    pub fn rules(&self) -> &TagRules {
        &self.rules
    }

    pub fn areas(&self, view: ViewMode) -> Vec<SkillArea> {
        filter_by_view_with(&self.content.skill_areas, view, &self.rules)
    }

    pub fn roadmap_groups(&self) -> RoadmapGroups {
        group_roadmap(&self.content.roadmap)
    }

    pub fn certifications(&self) -> Vec<RoadmapItem> {
        certifications_of(&self.content.roadmap)
    }

    pub fn render(&self, view: ViewMode) -> SkillsPageView {
        let areas: Vec<AreaView> = self
            .areas(view)
            .iter()
            .map(|area| AreaView::new(area, &self.rules))
            .collect();

        let groups = self.roadmap_groups();
        let roadmap = groups
            .iter()
            .map(|(key, items)| RoadmapGroupView::new(key, items))
            .collect();

        let certifications = self
            .certifications()
            .iter()
            .map(CertificationView::from)
            .collect();

        tracing::debug!(
            "Rendered {} view: {} areas, {} roadmap items",
            view,
            areas.len(),
            groups.len()
        );

        SkillsPageView {
            view,
            view_label: view.label(),
            areas,
            roadmap,
            certifications,
        }
    }
}
