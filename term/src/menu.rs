//! Interactive numbered menus.
//!
//! A [`Menu`] presents its entries as a numbered list, reads one selection,
//! and dispatches: submenus recurse, actions run and then wait for Enter,
//! `0` (or an explicit `Back` row) returns to the parent. EOF or `q` quits
//! the whole menu tree. Selection is line-based; invalid input re-prompts.
//!
//! Rendering is a pure function so the layout is unit-testable without a
//! terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use crossterm::style::Attribute;
use tracing::debug;

use crate::cursor;
use crate::style::{self, TextStyle};

/// A selectable leaf: a title and a callback.
pub struct Action {
    title: String,
    run: Box<dyn FnMut()>,
}

impl Action {
    /// Creates an action.
    pub fn new(title: impl Into<String>, run: impl FnMut() + 'static) -> Self {
        Self {
            title: title.into(),
            run: Box::new(run),
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.title).finish()
    }
}

/// One row of a menu.
#[derive(Debug)]
pub enum Entry {
    /// A nested menu; selecting it enters the submenu.
    Submenu(Menu),
    /// A callback; selecting it runs the callback.
    Action(Action),
    /// Unnumbered display text (section header, separator).
    Heading(String),
    /// An explicit "0) Back" row. Rendered at the end automatically when no
    /// entry places it elsewhere.
    Back,
}

/// Navigation outcome of one menu level.
enum Outcome {
    Back,
    Quit,
}

/// A navigable menu of headings, actions, and submenus.
///
/// # Examples
///
/// ```
/// use argot_term::menu::Menu;
///
/// let menu = Menu::new("Main")
///     .heading("-- tools --")
///     .action("Say hi", || println!("hi"))
///     .submenu(Menu::new("More"));
///
/// let rendered = menu.render();
/// assert!(rendered.contains("1) Say hi"));
/// assert!(rendered.contains("2) More"));
/// assert!(rendered.contains("0) Back"));
/// ```
pub struct Menu {
    title: String,
    prompt: String,
    entries: Vec<Entry>,
}

impl Menu {
    /// Creates an empty menu. The prompt defaults to `"{title}> "`.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let prompt = format!("{title}> ");
        Self {
            title,
            prompt,
            entries: Vec::new(),
        }
    }

    /// Overrides the input prompt.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Appends a nested menu.
    pub fn submenu(mut self, menu: Menu) -> Self {
        self.entries.push(Entry::Submenu(menu));
        self
    }

    /// Appends an action.
    pub fn action(mut self, title: impl Into<String>, run: impl FnMut() + 'static) -> Self {
        self.entries.push(Entry::Action(Action::new(title, run)));
        self
    }

    /// Appends unnumbered display text.
    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.entries.push(Entry::Heading(text.into()));
        self
    }

    /// Appends an explicit back row at this position.
    pub fn back_entry(mut self) -> Self {
        self.entries.push(Entry::Back);
        self
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of selectable rows (submenus and actions).
    pub fn selectable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Submenu(_) | Entry::Action(_)))
            .count()
    }

    /// Renders the menu as displayed, without touching the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&style::paint(
            &self.title,
            TextStyle::new().attribute(Attribute::Bold),
        ));
        out.push('\n');

        let mut index = 0;
        let mut back_rendered = false;
        for entry in &self.entries {
            match entry {
                Entry::Submenu(menu) => {
                    index += 1;
                    out.push_str(&format!("   {index}) {}\n", menu.title));
                }
                Entry::Action(action) => {
                    index += 1;
                    out.push_str(&format!("   {index}) {}\n", action.title));
                }
                Entry::Heading(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Entry::Back => {
                    out.push_str("   0) Back\n");
                    back_rendered = true;
                }
            }
        }
        if !back_rendered {
            out.push_str("\n   0) Back\n");
        }
        out.push('\n');
        out.push_str(&self.prompt);
        out
    }

    /// Runs the menu against stdin until the user backs out of this level or
    /// quits the tree.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_level(&mut input)?;
        style::reset()
    }

    fn run_level(&mut self, input: &mut dyn BufRead) -> io::Result<Outcome> {
        if self.selectable_count() == 0 {
            cursor::clear(false)?;
            println!("Empty menu");
            wait_for_enter(input)?;
            return Ok(Outcome::Back);
        }

        loop {
            cursor::clear(false)?;
            print!("{}", self.render());
            io::stdout().flush()?;

            let Some(choice) = self.read_choice(input)? else {
                return Ok(Outcome::Quit);
            };
            if choice == 0 {
                debug!(menu = %self.title, "back");
                return Ok(Outcome::Back);
            }

            let Some(entry) = self.selectable_mut(choice) else {
                continue;
            };
            match entry {
                Entry::Submenu(menu) => {
                    debug!(menu = %menu.title, "entering submenu");
                    if let Outcome::Quit = menu.run_level(&mut *input)? {
                        return Ok(Outcome::Quit);
                    }
                }
                Entry::Action(action) => {
                    debug!(action = %action.title, "running action");
                    cursor::clear(false)?;
                    (action.run)();
                    wait_for_enter(input)?;
                }
                _ => {}
            }
        }
    }

    /// Reads selections until one is valid. `None` means quit (EOF or `q`).
    fn read_choice(&self, input: &mut dyn BufRead) -> io::Result<Option<usize>> {
        let count = self.selectable_count();
        loop {
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match trimmed.parse::<usize>() {
                Ok(n) if n <= count => return Ok(Some(n)),
                _ => {
                    print!("{}", self.prompt);
                    io::stdout().flush()?;
                }
            }
        }
    }

    /// The `n`th selectable entry, 1-based.
    fn selectable_mut(&mut self, n: usize) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .filter(|e| matches!(e, Entry::Submenu(_) | Entry::Action(_)))
            .nth(n.checked_sub(1)?)
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let titles: Vec<&str> = self
            .entries
            .iter()
            .filter_map(|e| match e {
                Entry::Submenu(m) => Some(m.title()),
                Entry::Action(a) => Some(a.title()),
                _ => None,
            })
            .collect();
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("entries", &titles)
            .finish()
    }
}

fn wait_for_enter(input: &mut dyn BufRead) -> io::Result<()> {
    print!("\nPress Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn demo_menu() -> Menu {
        Menu::new("Main")
            .heading("-- tools --")
            .action("First", || {})
            .submenu(Menu::new("Nested").action("Inner", || {}))
            .action("Second", || {})
    }

    #[test]
    fn test_render_numbers_only_selectable_rows() {
        let rendered = demo_menu().render();
        assert!(rendered.contains("-- tools --"));
        assert!(rendered.contains("1) First"));
        assert!(rendered.contains("2) Nested"));
        assert!(rendered.contains("3) Second"));
        assert!(rendered.contains("0) Back"));
        assert!(rendered.ends_with("Main> "));
    }

    #[test]
    fn test_explicit_back_entry_suppresses_trailing_one() {
        let rendered = Menu::new("M").back_entry().action("A", || {}).render();
        assert_eq!(rendered.matches("0) Back").count(), 1);
    }

    #[test]
    fn test_read_choice_reprompts_until_valid() {
        let menu = demo_menu();
        let mut input = Cursor::new(b"nope\n9\n2\n".to_vec());
        let choice = menu.read_choice(&mut input).unwrap();
        assert_eq!(choice, Some(2));
    }

    #[test]
    fn test_read_choice_quits_on_eof_and_q() {
        let menu = demo_menu();
        let mut empty = Cursor::new(Vec::new());
        assert_eq!(menu.read_choice(&mut empty).unwrap(), None);

        let mut q = Cursor::new(b"q\n".to_vec());
        assert_eq!(menu.read_choice(&mut q).unwrap(), None);
    }

    #[test]
    fn test_selectable_lookup_is_one_based() {
        let mut menu = demo_menu();
        match menu.selectable_mut(2) {
            Some(Entry::Submenu(m)) => assert_eq!(m.title(), "Nested"),
            other => panic!("unexpected entry: {other:?}"),
        }
        assert!(menu.selectable_mut(0).is_none());
        assert!(menu.selectable_mut(4).is_none());
    }
}
