pub mod cli;
pub mod content_config;

#[cfg(feature = "cli")]
use crate::domain::model::ViewMode;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "skills-view")]
#[command(about = "Render the skills matrix, roadmap and certifications for a view mode")]
pub struct CliConfig {
    /// TOML content file; the built-in content is used when omitted
    #[arg(short, long, env = "SKILLS_CONTENT")]
    pub content: Option<String>,

    /// Skills matrix view: job or all
    #[arg(long, default_value = "job")]
    pub view: ViewMode,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
