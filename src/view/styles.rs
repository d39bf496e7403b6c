//! Palette for the article screen.
//!
//! Two palettes (light and dark) with colors, or modifiers only when colors
//! are disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on or off, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ArticleStyles =====

/// Resolved styles for one palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStyles {
    /// Screen background and body text.
    pub base: Style,
    /// Toolbar title.
    pub title: Style,
    /// Toolbar subtitle.
    pub subtitle: Style,
    /// Bottom bar and submenu surface.
    pub bar: Style,
    /// Unchecked button.
    pub button: Style,
    /// Checked button.
    pub button_checked: Style,
    /// Every match.
    pub search_match: Style,
    /// Focused match.
    pub search_focus: Style,
    /// Toast body.
    pub toast: Style,
    /// Error toast body.
    pub toast_error: Style,
    /// Toast button.
    pub toast_action: Style,
}

impl ArticleStyles {
    /// Styles for the light or dark palette, monochrome when colors are off.
    pub fn new(config: ColorConfig, dark_mode: bool) -> Self {
        if !config.colors_enabled() {
            return Self::monochrome();
        }

        let (fg, bg, surface, accent) = if dark_mode {
            (Color::Gray, Color::Black, Color::DarkGray, Color::LightMagenta)
        } else {
            (Color::Black, Color::White, Color::Gray, Color::Magenta)
        };

        Self {
            base: Style::default().fg(fg).bg(bg),
            title: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(accent),
            bar: Style::default().fg(fg).bg(surface),
            button: Style::default().fg(fg),
            button_checked: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            search_match: Style::default().fg(Color::Black).bg(Color::Yellow),
            search_focus: Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            toast: Style::default().fg(bg).bg(fg),
            toast_error: Style::default().fg(Color::White).bg(Color::Red),
            toast_action: Style::default().fg(accent).add_modifier(Modifier::BOLD),
        }
    }

    fn monochrome() -> Self {
        Self {
            base: Style::default(),
            title: Style::default().add_modifier(Modifier::BOLD),
            subtitle: Style::default().add_modifier(Modifier::ITALIC),
            bar: Style::default(),
            button: Style::default(),
            button_checked: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            search_match: Style::default().add_modifier(Modifier::UNDERLINED),
            search_focus: Style::default().add_modifier(Modifier::REVERSED),
            toast: Style::default().add_modifier(Modifier::REVERSED),
            toast_error: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            toast_action: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

// ===== Tests =====
