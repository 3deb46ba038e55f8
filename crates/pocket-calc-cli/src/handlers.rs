//! Subcommand handlers

use std::io::Write;

use pocket_calc::core::parse_sequence;
use pocket_calc::keypad::Keypad;
use pocket_calc::tui::CalculatorApp;
use tracing::{debug, info};

use crate::commands::{KeysArgs, OutputFormat, RunArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{keypad_buttons, render_keypad_text, render_run_text, RunReport};

/// Presses the keys given on the command line and prints the display
pub fn run_keys<W: Write>(out: &mut W, config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let script = args.keys.join(" ");
    let keys = parse_sequence(&script)?;
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys given"));
    }
    debug!(count = keys.len(), "parsed key script");

    let report = RunReport::run(&keys, args.trace);
    match args.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text if config.verbosity.is_quiet() => {
            writeln!(out, "{}", report.display.primary)?;
        }
        OutputFormat::Text => writeln!(out, "{}", render_run_text(&report))?,
    }
    Ok(())
}

/// Prints the keypad layout
pub fn show_keypad<W: Write>(out: &mut W, args: &KeysArgs) -> CliResult<()> {
    let keypad = Keypad::new();
    match args.format {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&keypad_buttons(&keypad))?
        )?,
        OutputFormat::Text => writeln!(out, "{}", render_keypad_text(&keypad))?,
    }
    Ok(())
}

/// Starts the interactive terminal calculator
pub fn run_tui() -> CliResult<()> {
    info!("starting terminal calculator");
    pocket_calc::tui::run(CalculatorApp::new())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    fn run_args(keys: &[&str], format: OutputFormat) -> RunArgs {
        RunArgs {
            keys: keys.iter().map(|k| (*k).to_string()).collect(),
            format,
            trace: false,
        }
    }

    fn capture(config: &CliConfig, args: &RunArgs) -> CliResult<String> {
        let mut out = Vec::new();
        run_keys(&mut out, config, args)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_keys_text() {
        console::set_colors_enabled(false);
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let text = capture(&config, &run_args(&["7", "+", "8", "="], OutputFormat::Text)).unwrap();
        assert_eq!(text.lines().last().unwrap().trim(), "15");
    }

    #[test]
    fn test_run_keys_joins_multi_digit_args() {
        let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
        let text = capture(&config, &run_args(&["12.5", "X", "2", "="], OutputFormat::Text)).unwrap();
        assert_eq!(text, "25\n");
    }

    #[test]
    fn test_run_keys_json() {
        let text = capture(&CliConfig::new(), &run_args(&["9", "/", "0", "="], OutputFormat::Json)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["display"]["primary"], "Infinity");
        assert_eq!(json["display"]["fresh_result"], true);
    }

    #[test]
    fn test_run_keys_rejects_unknown_label() {
        let err = capture(&CliConfig::new(), &run_args(&["7", "sqrt"], OutputFormat::Text)).unwrap_err();
        assert!(matches!(err, CliError::Key(_)));
    }

    #[test]
    fn test_run_keys_rejects_blank_script() {
        let err = capture(&CliConfig::new(), &run_args(&[" "], OutputFormat::Text)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_show_keypad_json() {
        let mut out = Vec::new();
        show_keypad(&mut out, &KeysArgs { format: OutputFormat::Json }).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 19);
    }
}
