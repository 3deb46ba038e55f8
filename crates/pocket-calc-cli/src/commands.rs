//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Pocket Calc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", env = "POCKET_CALC_COLOR", global = true)]
    pub color: ColorArg,

    /// Log filter directive, e.g. `pocket_calc=trace`
    #[arg(long, env = "POCKET_CALC_LOG", global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Run(RunArgs),

    /// Show the keypad layout
    Keys(KeysArgs),

    /// Start the interactive terminal calculator
    Tui,
}

/// Arguments for `run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Keys to press, e.g. `7 + 8 =` or `12.5 X 2 =`
    ///
    /// Labels: 0-9 . + - X / = AC +/- % DEL
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for `keys`
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for printed results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Color argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pocket-calc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_collects_keys() {
        let cli = parse(&["run", "7", "+", "8", "="]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.keys, ["7", "+", "8", "="]);
                assert_eq!(args.format, OutputFormat::Text);
                assert!(!args.trace);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_accepts_minus_keys() {
        let cli = parse(&["run", "5", "-", "3", "+/-", "="]);
        match cli.command {
            Commands::Run(args) => assert_eq!(args.keys, ["5", "-", "3", "+/-", "="]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_json_and_trace() {
        let cli = parse(&["run", "--format", "json", "--trace", "1"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.trace);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_run_requires_keys() {
        assert!(Cli::try_parse_from(["pocket-calc", "run"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "--color", "never", "keys"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorArg::Never);
        assert!(matches!(cli.command, Commands::Keys(_)));
    }

    #[test]
    fn test_tui_subcommand() {
        assert!(matches!(parse(&["tui"]).command, Commands::Tui));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
