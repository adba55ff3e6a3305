//! Color palette for naval-cli output
//! Maps each part of a rendered quote to a terminal style, or to plain text when color is off

use console::Style;

/// The parts of the output that get their own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The ASCII-art portrait
    Art,
    /// Quote text
    Quote,
    /// The attribution line
    Author,
    /// `[n]` markers in multi-quote output
    Number,
    /// Separator between numbered quotes
    Rule,
}

/// Explicit color configuration threaded through rendering.
///
/// A disabled palette returns text untouched, so rendering never depends on
/// process-wide terminal detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn colored() -> Self {
        Self::new(true)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Style used for a role when color is enabled
    pub fn style(role: Role) -> Style {
        let style = match role {
            Role::Art => Style::new().cyan(),
            Role::Quote => Style::new().white(),
            Role::Author => Style::new().yellow().bold(),
            Role::Number => Style::new().green().bold(),
            Role::Rule => Style::new().dim(),
        };
        style.force_styling(true)
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        // Empty cells stay empty so blank rows carry no stray escape codes
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        Self::style(role).apply_to(text).to_string()
    }

    pub fn art(&self, text: &str) -> String {
        self.paint(Role::Art, text)
    }

    pub fn quote(&self, text: &str) -> String {
        self.paint(Role::Quote, text)
    }

    pub fn author(&self, text: &str) -> String {
        self.paint(Role::Author, text)
    }

    pub fn number(&self, text: &str) -> String {
        self.paint(Role::Number, text)
    }

    pub fn rule(&self, text: &str) -> String {
        self.paint(Role::Rule, text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}
