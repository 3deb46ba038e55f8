//! CLI configuration

use serde::{Deserialize, Serialize};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and results
    #[default]
    Normal,
    /// Verbose - engine transitions
    Verbose,
    /// Debug - everything
    Debug,
}

impl Verbosity {
    /// Builds a verbosity from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Only errors are logged and `run` prints the bare result
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Engine transitions are logged
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "pocket_calc=debug,pocket_calc_cli=debug,info",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Color only on a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against whether stdout is a terminal
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Explicit log filter (overrides the verbosity default)
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Default configuration: normal verbosity, auto color
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Replaces the color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set an explicit log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        self.log_filter = filter.filter(|f| !f.trim().is_empty());
        self
    }

    /// Log filter directive in effect
    #[must_use]
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.verbosity.log_directive())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_predicates() {
        let flags: Vec<_> = [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose, Verbosity::Debug]
            .into_iter()
            .map(|v| (v.is_quiet(), v.is_verbose()))
            .collect();
        assert_eq!(flags, [(true, false), (false, false), (false, true), (false, true)]);
    }

    #[test]
    fn test_fixed_color_choices_ignore_terminal() {
        assert_eq!(
            [ColorChoice::Always, ColorChoice::Never].map(ColorChoice::should_color),
            [true, false]
        );
    }

    #[test]
    fn test_verbose_config_enables_engine_debug() {
        let cfg = CliConfig::new()
            .with_color(ColorChoice::Never)
            .with_verbosity(Verbosity::Verbose);
        assert_eq!((cfg.verbosity, cfg.color), (Verbosity::Verbose, ColorChoice::Never));
        assert!(cfg.effective_log_filter().contains("pocket_calc=debug"));
    }

    #[test]
    fn test_explicit_log_filter_wins() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Quiet)
            .with_log_filter(Some("pocket_calc=trace".into()));
        assert_eq!(config.effective_log_filter(), "pocket_calc=trace");
    }

    #[test]
    fn test_blank_log_filter_ignored() {
        let config = CliConfig::new().with_log_filter(Some("  ".into()));
        assert_eq!(config.log_filter, None);
        assert_eq!(config.effective_log_filter(), "warn");
    }

    #[test]
    fn test_config_serialization() {
        let cfg = CliConfig::new().with_log_filter(Some("pocket_calc=trace".into()));
        let back: CliConfig = serde_json::from_value(serde_json::to_value(&cfg).unwrap()).unwrap();
        assert_eq!(back.log_filter.as_deref(), Some("pocket_calc=trace"));
        assert_eq!(back.verbosity, Verbosity::Normal);
    }
}
