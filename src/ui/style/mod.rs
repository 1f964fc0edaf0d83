//! Colour themes for the terminal dialog.
//!
//! Themes are plain bundles of [`Style`]s. A handful are built in and can be
//! looked up by case-insensitive name or alias.

mod builtins;

use ratatui::style::Style;

pub use builtins::{LIGHT, SLATE, SOLARIZED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub prompt: Style,
    pub count: Style,
    pub row_highlight: Style,
    pub highlight: Style,
    pub empty: Style,
    pub border: Style,
}

impl Theme {
    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn count_style(&self) -> Style {
        self.count
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    /// Style applied to the matched part of an item.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, normalized: &str) -> bool {
        self.name.eq_ignore_ascii_case(normalized)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(normalized))
    }
}

/// Look up a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim();
    builtins::DEFINITIONS
        .iter()
        .find(|definition| definition.answers_to(normalized))
        .map(|definition| definition.theme)
}

/// Canonical names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = builtins::DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect();
    names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
    names
}
