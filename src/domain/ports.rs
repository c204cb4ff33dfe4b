use crate::core::tags::TagRules;
use crate::domain::model::ContentModel;
use crate::utils::error::Result;

/// Content plus the tag classification it was authored against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedContent {
    pub model: ContentModel,
    pub tag_rules: TagRules,
}

/// Supplies the static content, loaded once before any view is derived.
pub trait ContentSource {
    fn load(&self) -> Result<LoadedContent>;
}
