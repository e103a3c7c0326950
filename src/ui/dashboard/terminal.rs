use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, ResetColor, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use log::warn;

use crate::error::{DashError, Result};

const FALLBACK_WIDTH: u16 = 80;
const FALLBACK_HEIGHT: u16 = 24;

/// Current terminal size, or 80x24 when it cannot be queried
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT))
}

/// Hides the cursor for the lifetime of the dashboard and restores it on drop
pub struct TerminalSession<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Clear the screen once, home the cursor and hide it
    pub fn enter(mut out: W) -> Result<Self> {
        execute!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| DashError::terminal(format!("failed to prepare terminal: {}", e)))?;
        Ok(Self { out, active: true })
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Show the cursor and reset colors; safe to call more than once
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, SetAttribute(Attribute::Reset), ResetColor, Show)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}
