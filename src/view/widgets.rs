//! Toolbar, bottom bar and submenu widgets.

use super::screen::ArticleScreen;
use super::styles::ArticleStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

fn toggle<'a>(label: &'a str, checked: bool, styles: &ArticleStyles) -> Span<'a> {
    let style = if checked {
        styles.button_checked
    } else {
        styles.button
    };
    Span::styled(label, style)
}

// ===== Toolbar =====

/// Title row with logo, subtitle row with category.
pub struct Toolbar<'a> {
    screen: &'a ArticleScreen,
    styles: &'a ArticleStyles,
}

impl<'a> Toolbar<'a> {
    /// Widget over `screen`.
    pub fn new(screen: &'a ArticleScreen, styles: &'a ArticleStyles) -> Self {
        Self { screen, styles }
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.screen.logo), self.styles.subtitle),
                Span::styled(self.screen.title.as_str(), self.styles.title),
            ]),
            Line::from(Span::styled(
                format!("  {}", self.screen.subtitle),
                self.styles.subtitle,
            )),
        ];
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .style(self.styles.base)
            .render(area, buf);
    }
}

// ===== Bottom bar =====

/// Action buttons, or the search controls while search mode is on.
pub struct BottomBar<'a> {
    screen: &'a ArticleScreen,
    styles: &'a ArticleStyles,
}

impl<'a> BottomBar<'a> {
    /// Widget over `screen`.
    pub fn new(screen: &'a ArticleScreen, styles: &'a ArticleStyles) -> Self {
        Self { screen, styles }
    }

    fn buttons_line(&self) -> Line<'static> {
        let s = self.screen;
        let st = self.styles;
        Line::from(vec![
            toggle(if s.like_checked { "♥ like (l)" } else { "♡ like (l)" }, s.like_checked, st),
            Span::raw("   "),
            toggle("⚑ bookmark (b)", s.bookmark_checked, st),
            Span::raw("   "),
            toggle("⇪ share (s)", false, st),
            Span::raw("   "),
            toggle("⚙ settings (m)", s.settings_checked, st),
        ])
    }

    fn search_line(&self) -> Line<'static> {
        let s = self.screen;
        let mut spans = vec![Span::raw("/ ")];
        spans.push(Span::styled(s.search_query_text.clone(), self.styles.title));
        if s.search_focused {
            spans.push(Span::styled("█", self.styles.button_checked));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(s.search_info_text(), self.styles.subtitle));
        // Navigation is useless without results.
        let nav_style = if s.search_count == 0 {
            Style::default().add_modifier(ratatui::style::Modifier::DIM)
        } else {
            self.styles.button
        };
        spans.push(Span::styled("   ↑ N  ↓ n", nav_style));
        spans.push(Span::styled("   ✕ Esc", self.styles.button));
        Line::from(spans)
    }
}

impl Widget for BottomBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.screen.search_bar_visible {
            self.search_line()
        } else {
            self.buttons_line()
        };
        Clear.render(area, buf);
        Paragraph::new(line)
            .block(Block::default().borders(Borders::TOP))
            .style(self.styles.bar)
            .render(area, buf);
    }
}

// ===== Submenu =====

/// Text size toggles and the dark mode switch.
pub struct Submenu<'a> {
    screen: &'a ArticleScreen,
    styles: &'a ArticleStyles,
}

impl<'a> Submenu<'a> {
    /// Widget over `screen`.
    pub fn new(screen: &'a ArticleScreen, styles: &'a ArticleStyles) -> Self {
        Self { screen, styles }
    }
}

impl Widget for Submenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.screen;
        let st = self.styles;
        let switch = if s.dark_mode_checked { "[x]" } else { "[ ]" };
        let lines = vec![
            Line::from(vec![
                toggle("A- (-)", s.text_down_checked, st),
                Span::raw("   "),
                toggle("A+ (+)", s.text_up_checked, st),
            ]),
            Line::from(vec![
                Span::styled("Dark mode (d) ", st.button),
                toggle(switch, s.dark_mode_checked, st),
            ]),
        ];
        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Settings"))
            .style(st.bar)
            .render(area, buf);
    }
}
