//! Tracing subscriber setup
//!
//! Logs go to stderr so `run` output on stdout stays machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Builds the log filter for a configuration
pub fn build_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    EnvFilter::try_new(config.effective_log_filter())
        .map_err(|e| CliError::logging(format!("bad filter '{}': {e}", config.effective_log_filter())))
}

/// Installs the global subscriber
pub fn init(config: &CliConfig) -> CliResult<()> {
    let filter = build_filter(config)?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color.should_color())
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
