//! Interactive terminal loop

use std::io::{self, Stdout, Write};
use std::time::Instant;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::draw;

/// Runs the calculator until the user quits
///
/// The terminal is restored even when the loop fails.
pub fn run(mut app: CalculatorApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    info!("terminal calculator started");

    let result = run_app(&mut app, &mut stdout);

    disable_raw_mode()?;
    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    info!(primary = %app.calculator().primary(), "terminal calculator stopped");
    result
}

fn run_app(app: &mut CalculatorApp, out: &mut Stdout) -> io::Result<()> {
    let handler = InputHandler::new();
    execute!(out, Clear(ClearType::All))?;

    loop {
        draw(app, out)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_action(handler.handle_key(key));
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                execute!(out, Clear(ClearType::All))?;
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    out.flush()
}
