//! ANSI styling sink.
//!
//! A [`TextStyle`] bundles an optional foreground, background, and attribute;
//! [`paint`] applies it to a piece of text and returns the decorated string.
//! Pure formatting — no terminal state is read or kept.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::ContentStyle;
pub use crossterm::style::{Attribute, Color};

/// Foreground/background/attribute triple.
///
/// # Examples
///
/// ```
/// use argot_term::style::{paint, TextStyle};
/// use crossterm::style::{Attribute, Color};
///
/// let style = TextStyle::new().fg(Color::Green).attribute(Attribute::Bold);
/// let painted = paint("ok", style);
/// assert!(painted.contains("ok"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attribute: Option<Attribute>,
}

impl TextStyle {
    /// An empty style; painting with it returns the text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Sets the text attribute (bold, dim, underlined, ...).
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    fn content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg;
        style.background_color = self.bg;
        if let Some(attribute) = self.attribute {
            style.attributes.set(attribute);
        }
        style
    }
}

/// A 256-color palette entry, for callers that think in numeric codes.
pub fn ansi256(code: u8) -> Color {
    Color::AnsiValue(code)
}

/// Applies a style to text and returns the decorated string.
pub fn paint(text: impl Display, style: TextStyle) -> String {
    style.content_style().apply(text).to_string()
}

/// Prints a styled line to stdout.
pub fn println_styled(text: impl Display, style: TextStyle) {
    println!("{}", paint(text, style));
}

/// Emits a reset sequence, returning the terminal to default rendition.
pub fn reset() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "{}", Attribute::Reset)?;
    out.flush()
}
