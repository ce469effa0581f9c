//! Clearing the terminal between game phases.

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Clears the screen. Purely cosmetic.
pub trait ScreenClearer {
    fn clear(&mut self) -> io::Result<()>;
}

/// Clears the real terminal and homes the cursor.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalClearer;

impl ScreenClearer for TerminalClearer {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Does nothing. Used by tests and `--no-clear`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopClearer;

impl ScreenClearer for NoopClearer {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}
