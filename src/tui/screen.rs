//! # Screen
//!
//! The terminal as a single owned resource. `TerminalScreen::acquire()`
//! enters raw mode and the alternate screen; dropping it restores the
//! terminal, so every way out of the event loop (quit, I/O error, panic
//! unwind) releases it exactly once.

use std::io;

use log::info;
use ratatui::DefaultTerminal;

use crate::core::state::App;
use crate::tui::event::{TuiEvent, read_event};
use crate::tui::ui;

/// What the event loop needs from a display: draw a frame, wait for a key.
pub trait Screen {
    fn draw(&mut self, app: &App) -> io::Result<()>;

    /// Blocks until the next relevant event.
    fn next_event(&mut self) -> io::Result<TuiEvent>;
}

pub struct TerminalScreen {
    terminal: DefaultTerminal,
}

impl TerminalScreen {
    pub fn acquire() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        info!("Terminal initialized");
        Ok(Self { terminal })
    }
}

impl Screen for TerminalScreen {
    fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, app))?;
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<TuiEvent> {
        read_event()
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}
