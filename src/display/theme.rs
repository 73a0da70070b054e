//! Terminal styling
//!
//! A `Theme` is built once by the entry point and handed to whatever
//! renders output. With colors off every helper returns the text unchanged.

use crossterm::style::{Color, Stylize};

/// Width of section headers
pub const HEADER_WIDTH: usize = 50;

/// Presentation state for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// ANSI colors enabled
    pub fn colored() -> Self {
        Self::new(true)
    }

    /// No escape codes at all
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.colored {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    /// Three-line banner: rule, centered title, rule
    pub fn header(&self, title: &str) -> String {
        let rule = "=".repeat(HEADER_WIDTH);
        let centered = format!("{:^width$}", title, width = HEADER_WIDTH);
        [&rule, &centered, &rule]
            .iter()
            .map(|line| self.paint(line, Color::Cyan, true))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, Color::Blue, true)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, Color::Yellow, false)
    }

    /// Numbered entry of the main menu
    pub fn menu_option(&self, number: usize, text: &str) -> String {
        format!("{}{}", self.paint(&format!("  {}. ", number), Color::Green, false), text)
    }

    /// Numbered entry of a sub-menu
    pub fn submenu_option(&self, number: usize, text: &str) -> String {
        format!("{}{}", self.paint(&format!("  {}. ", number), Color::Yellow, false), text)
    }

    /// Amount shown as money left (green)
    pub fn credit(&self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }

    /// Amount shown as money spent (red)
    pub fn debit(&self, text: &str) -> String {
        self.paint(text, Color::Red, false)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
