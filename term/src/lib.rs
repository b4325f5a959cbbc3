//! Terminal presentation helpers.
//!
//! Three small, independent modules:
//!
//! - [`style`] — ANSI styling sink: build a [`style::TextStyle`], apply it
//!   with [`style::paint`]. Pure formatting, no terminal state.
//! - [`cursor`] — fire-and-forget cursor movement, save/restore (with an
//!   RAII [`cursor::PositionGuard`]), and screen clearing.
//! - [`menu`] — numbered interactive menus: present options, read one
//!   selection, dispatch.
//!
//! None of these hold state machines or concurrency; they are the
//! presentation collaborators of the `argot-core` parser.

pub mod cursor;
pub mod menu;
pub mod style;

pub use menu::{Action, Entry, Menu};
pub use style::{paint, TextStyle};
