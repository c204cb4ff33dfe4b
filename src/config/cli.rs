use crate::config::content_config::ContentConfig;
use crate::core::{ContentSource, LoadedContent};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

/// Content read from a TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileContentSource {
    fn load(&self) -> Result<LoadedContent> {
        tracing::debug!("Loading content from {}", self.path.display());
        let config = ContentConfig::from_file(&self.path)?;
        config.validate()?;
        Ok(config.into_loaded())
    }
}

/// Content compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn load(&self) -> Result<LoadedContent> {
        tracing::debug!("Loading built-in content");
        let config = ContentConfig::builtin()?;
        config.validate()?;
        Ok(config.into_loaded())
    }
}
