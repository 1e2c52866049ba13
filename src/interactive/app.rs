//! TUI application state and event loop

use super::terminal::TerminalSession;
use crate::session::{Controller, Key};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::Terminal;
use tracing::info;

/// Application state
pub struct App<'a, R: Rng> {
    pub controller: Controller<'a, R>,
    pub should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub const fn new(controller: Controller<'a, R>) -> Self {
        Self {
            controller,
            should_quit: false,
        }
    }

    /// React to one key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            code if !self.controller.state().is_playing() => match code {
                // The restart control
                KeyCode::Enter | KeyCode::Char('n' | 'N' | 'y' | 'Y') => {
                    self.controller.restart();
                }
                KeyCode::Char('q' | 'Q') => {
                    self.should_quit = true;
                }
                _ => {}
            },
            code => {
                self.controller.handle_key(key_from_code(code));
            }
        }
    }
}

/// Map a crossterm key to the game's keyboard contract
#[must_use]
pub const fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored either way.
pub fn run_tui<R: Rng>(mut app: App<'_, R>) -> Result<()> {
    let mut session = TerminalSession::acquire()?;

    info!("starting interactive session");
    app.controller.start();

    run_app(session.terminal(), &mut app)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit {
            info!("leaving interactive session");
            break;
        }
    }

    Ok(())
}
