//! Pocket Calc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc run 7 + 8 =        # 15
//! pocket-calc keys               # Show the keypad
//! pocket-calc tui                # Interactive mode
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc_cli::{build_config, handlers, logging, Cli, CliResult, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    console::set_colors_enabled(config.color.should_color());
    logging::init(&config)?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Run(args) => handlers::run_keys(&mut stdout, &config, &args),
        Commands::Keys(args) => handlers::show_keypad(&mut stdout, &args),
        Commands::Tui => {
            drop(stdout);
            handlers::run_tui()
        }
    }
}
