//! Fire-and-forget cursor control.
//!
//! Thin wrappers over the terminal escape commands; every function writes to
//! stdout and flushes. [`PositionGuard`] gives scoped save/restore.

use std::io;

use crossterm::cursor::{
    MoveDown, MoveLeft, MoveRight, MoveTo, MoveUp, RestorePosition, SavePosition,
};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Moves the cursor up `n` rows.
pub fn up(n: u16) -> io::Result<()> {
    execute!(io::stdout(), MoveUp(n))
}

/// Moves the cursor down `n` rows.
pub fn down(n: u16) -> io::Result<()> {
    execute!(io::stdout(), MoveDown(n))
}

/// Moves the cursor right `n` columns.
pub fn forward(n: u16) -> io::Result<()> {
    execute!(io::stdout(), MoveRight(n))
}

/// Moves the cursor left `n` columns.
pub fn back(n: u16) -> io::Result<()> {
    execute!(io::stdout(), MoveLeft(n))
}

/// Moves the cursor to an absolute column/row (0-based).
pub fn move_to(column: u16, row: u16) -> io::Result<()> {
    execute!(io::stdout(), MoveTo(column, row))
}

/// Saves the current cursor position.
pub fn save_position() -> io::Result<()> {
    execute!(io::stdout(), SavePosition)
}

/// Restores the last saved cursor position.
pub fn restore_position() -> io::Result<()> {
    execute!(io::stdout(), RestorePosition)
}

/// Clears the screen. Unless `keep_cursor` is set, the cursor also moves to
/// the top-left corner.
pub fn clear(keep_cursor: bool) -> io::Result<()> {
    if keep_cursor {
        execute!(io::stdout(), Clear(ClearType::All))
    } else {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Saves the cursor position on construction and restores it on drop.
///
/// # Examples
///
/// ```no_run
/// use argot_term::cursor::{self, PositionGuard};
///
/// # fn demo() -> std::io::Result<()> {
/// let guard = PositionGuard::new()?;
/// cursor::move_to(0, 0)?;
/// print!("status line");
/// drop(guard); // cursor returns to where it was
/// # Ok(())
/// # }
/// ```
pub struct PositionGuard(());

impl PositionGuard {
    /// Saves the current position.
    pub fn new() -> io::Result<Self> {
        save_position()?;
        Ok(Self(()))
    }
}

impl Drop for PositionGuard {
    fn drop(&mut self) {
        // Restore failures are unreportable from drop.
        let _ = restore_position();
    }
}
