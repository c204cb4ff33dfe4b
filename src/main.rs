use clap::Parser;
use portfolio_skills::core::view_model::SkillsPageView;
use portfolio_skills::utils::error::ContentError;
use portfolio_skills::utils::logger::{self, LogFormat};
use portfolio_skills::{BuiltinContent, CliConfig, FileContentSource, OutputFormat, SkillsEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose);

    tracing::info!("Starting skills-view");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = match load_engine(&config) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    let page = engine.render(config.view);

    match config.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&page)
                .map_err(ContentError::SerializationError)
                .unwrap_or_else(|e| exit_with(&e));
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&page)),
    }

    tracing::info!("Rendered {} view", config.view);
    Ok(())
}

fn load_engine(config: &CliConfig) -> portfolio_skills::Result<SkillsEngine> {
    match &config.content {
        Some(path) => {
            tracing::info!("Loading content from: {}", path);
            SkillsEngine::from_source(&FileContentSource::new(path))
        }
        None => SkillsEngine::from_source(&BuiltinContent),
    }
}

fn exit_with(e: &ContentError) -> ! {
    tracing::error!(
        "skills-view failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn render_text(page: &SkillsPageView) -> String {
    let mut out = String::new();

    out.push_str(&format!("Skills matrix ({})\n", page.view_label));
    for area in &page.areas {
        out.push_str(&format!("\n[{}] {}\n", area.icon, area.title));
        if let Some(description) = &area.description {
            out.push_str(&format!("  {}\n", description));
        }
        for skill in &area.skills {
            let dots: String = (1..=portfolio_skills::SkillLevel::MAX_RANK)
                .map(|i| if i <= skill.level_rank { '●' } else { '○' })
                .collect();
            let tags = if skill.tags.is_empty() {
                "—".to_string()
            } else {
                skill.tags.join(", ")
            };
            out.push_str(&format!(
                "  {} {} ({})  {}  [{}]\n",
                dots,
                skill.name,
                skill.level.as_str(),
                skill.notes.as_deref().unwrap_or("—"),
                tags
            ));
        }
    }

    out.push_str("\nRoadmap\n");
    for group in &page.roadmap {
        out.push_str(&format!("\n{}\n", group.label));
        for item in &group.items {
            out.push_str(&format!(
                "  - {} [{} / {}]\n",
                item.title, item.category_label, item.status_label
            ));
            if let Some(target) = &item.target {
                out.push_str(&format!("    Target: {}\n", target));
            }
        }
    }

    out.push_str("\nCertifications\n");
    for cert in &page.certifications {
        out.push_str(&format!(
            "  {} ({}) {:>3.0}%\n",
            cert.title,
            cert.status_pill,
            cert.progress * 100.0
        ));
    }

    out
}
