//! Color theme for the viewer.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme as ThemeConfig;

/// Styles used by the viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    header: Style,
    short: Style,
    command: Style,
    footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeConfig::Default)
    }
}

impl Theme {
    /// Create a theme from configuration.
    pub fn new(config: ThemeConfig) -> Self {
        match config {
            ThemeConfig::Default => Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                short: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                command: Style::default(),
                footer: Style::default().fg(Color::DarkGray),
            },
            ThemeConfig::Minimal => Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                short: Style::default().add_modifier(Modifier::BOLD),
                command: Style::default(),
                footer: Style::default().add_modifier(Modifier::DIM),
            },
            ThemeConfig::None => Self {
                header: Style::default(),
                short: Style::default(),
                command: Style::default(),
                footer: Style::default(),
            },
        }
    }

    /// Prefix header style.
    pub fn header(&self) -> Style {
        self.header
    }

    /// Short name style.
    pub fn short(&self) -> Style {
        self.short
    }

    /// Command text style.
    pub fn command(&self) -> Style {
        self.command
    }

    /// Footer style.
    pub fn footer(&self) -> Style {
        self.footer
    }
}
