//! Pocket Calc CLI library
//!
//! Command-line and terminal front end for the `pocket-calc` engine.
//!
//! ```bash
//! pocket-calc run 7 + 8 =             # Press keys, print the display
//! pocket-calc run --trace 12 / 0 =    # Show the display after every key
//! pocket-calc keys --format json      # Export the keypad layout
//! pocket-calc tui                     # Interactive calculator
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod output;

pub use commands::{Cli, ColorArg, Commands, KeysArgs, OutputFormat, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};

/// Builds the runtime configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_filter(cli.log_filter.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_config_from_flags() {
        let cli = Cli::try_parse_from([
            "pocket-calc",
            "-q",
            "--color",
            "never",
            "--log-filter",
            "pocket_calc=trace",
            "keys",
        ])
        .unwrap();
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.effective_log_filter(), "pocket_calc=trace");
    }
}
