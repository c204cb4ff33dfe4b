use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How `skills-view` writes its diagnostics. Logs always go to stderr so the
/// rendered page on stdout stays clean for piping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_skills=debug,skills_view=debug,info"
    } else {
        "portfolio_skills=info,skills_view=info,warn"
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(base.compact()).init(),
        LogFormat::Json => registry.with(base.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            let directive = default_directive(verbose);
            assert!(directive.parse::<EnvFilter>().is_ok(), "{}", directive);
        }
        assert!(default_directive(true).contains("portfolio_skills=debug"));
        assert!(default_directive(false).contains("portfolio_skills=info"));
    }
}
