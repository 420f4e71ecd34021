mod render;
pub mod state;
mod theme;

use crate::error::{AppError, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::AppState;
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive window until the user closes it. All recorded
/// transactions are dropped on return.
pub fn run_app() -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new();

    let looped = event_loop(&mut terminal, &mut state);
    let restored = restore_terminal(&mut terminal);
    info!(discarded = state.store.len(), "window closed");
    loop_error_first(looped, restored)
}

// A failed loop is reported even when restoring the terminal also fails.
fn loop_error_first(looped: Result<()>, restored: Result<()>) -> Result<()> {
    looped.and(restored)
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn event_loop(terminal: &mut AppTerminal, state: &mut AppState) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render::draw(frame, state))
            .map_err(|e| AppError::Terminal(format!("failed to draw terminal UI: {}", e)))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if state.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
