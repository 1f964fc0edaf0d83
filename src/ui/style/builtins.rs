use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    count: Style::new().fg(Color::Rgb(148, 163, 184)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray),
    border: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    count: Style::new().fg(Color::Rgb(100, 100, 100)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0)),
    highlight: Style::new()
        .fg(Color::Rgb(120, 120, 0))
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    border: Style::new().fg(Color::Rgb(160, 160, 160)),
};

pub const SOLARIZED: Theme = Theme {
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    count: Style::new().fg(Color::Rgb(147, 161, 161)),
    row_highlight: Style::new()
        .bg(Color::Rgb(0, 43, 54))
        .fg(Color::Rgb(181, 137, 0)),
    highlight: Style::new()
        .fg(Color::Rgb(181, 137, 0))
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::Rgb(88, 110, 117)),
    border: Style::new().fg(Color::Rgb(7, 54, 66)),
};

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
    ThemeDefinition::new("light", LIGHT),
    ThemeDefinition::new("solarized", SOLARIZED),
];
