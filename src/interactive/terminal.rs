//! Scoped ownership of the terminal
//!
//! While a `TerminalSession` is alive the terminal is in raw mode on the alternate
//! screen and key events belong to the game. Dropping it gives the terminal back,
//! also when unwinding from a panic.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::debug;

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered. The
    /// terminal is left as it was found in that case.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;

        let setup = || -> io::Result<_> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        };

        match setup() {
            Ok(terminal) => {
                debug!("terminal acquired");
                Ok(Self { terminal })
            }
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
        debug!("terminal released");
    }
}
