//! Terminal clearing as a capability.
//!
//! The animator only ever talks to the [`Screen`] trait; the crossterm-backed
//! implementation is the single place that touches the real terminal, which
//! keeps the animation loop testable with an in-memory double.

use crate::error::AppError;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::stdout;

pub trait Screen {
    /// Clears the visible terminal and homes the cursor.
    ///
    /// Failure is fatal for the caller: an animation that cannot clear the
    /// screen between cycles degenerates into scrolling noise.
    fn clear(&mut self) -> Result<(), AppError>;
}

/// Clears the real terminal via crossterm escape sequences.
///
/// Unlike shelling out to `clear`/`cls`, this works identically on every
/// platform crossterm supports.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn clear(&mut self) -> Result<(), AppError> {
        execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|e| AppError::screen_clear_error(format!("failed to clear terminal: {e}")))
    }
}
