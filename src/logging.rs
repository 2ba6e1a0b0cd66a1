// Diagnostic logging for termpong
// The game owns the terminal, so log output goes to a file instead.

use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding an `EnvFilter` directive; setting it turns logging on
pub const LOG_ENV: &str = "TERMPONG_LOG";

/// Initialize file logging
///
/// # Behavior
/// - Does nothing unless `config.enabled` is set or `TERMPONG_LOG` is present
/// - Otherwise truncates the log file and installs a global fmt subscriber
///   filtered by `TERMPONG_LOG` (default `info`)
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let directive = std::env::var(LOG_ENV).ok();
    if !config.enabled && directive.is_none() {
        return Ok(());
    }

    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = match directive.as_deref() {
        Some(directive) if !directive.is_empty() => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid {} directive `{}`", LOG_ENV, directive))?,
        _ => EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "termpong logging initialized");
    Ok(())
}
