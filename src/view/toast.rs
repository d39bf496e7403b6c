//! Transient notification shown above the bottom bar.

use super::constants::{TOAST_HEIGHT, TOAST_MARGIN_BOTTOM, TOAST_MARGIN_TOP};
use super::styles::ArticleStyles;
use crate::model::Notify;
use crate::scroll::OverlayFootprint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A notification with its display deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    notify: Notify,
    expires_at: Instant,
}

impl Toast {
    /// Toast for `notify`, due to expire `duration` after `now`.
    pub fn new(notify: Notify, now: Instant, duration: Duration) -> Self {
        Self {
            notify,
            expires_at: now + duration,
        }
    }

    /// Notification shown.
    pub fn notify(&self) -> &Notify {
        &self.notify
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before the toast should be dismissed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }

    /// Rows the toast occupies above the bar, margins included.
    pub fn footprint() -> OverlayFootprint {
        OverlayFootprint::new(
            f32::from(TOAST_HEIGHT),
            f32::from(TOAST_MARGIN_TOP),
            f32::from(TOAST_MARGIN_BOTTOM),
        )
    }
}

/// Widget drawing a [`Toast`].
pub struct ToastWidget<'a> {
    toast: &'a Toast,
    styles: &'a ArticleStyles,
}

impl<'a> ToastWidget<'a> {
    /// Widget over `toast`.
    pub fn new(toast: &'a Toast, styles: &'a ArticleStyles) -> Self {
        Self { toast, styles }
    }

    /// Body line: message, then the action label if any, as `[label (a)]`.
    fn line(&self, width: u16) -> Line<'static> {
        let notify = self.toast.notify();
        let label = notify
            .label()
            .map(|label| format!("  [{label} (a)]"))
            .unwrap_or_default();
        let room = usize::from(width).saturating_sub(label.width());
        let message = truncate_to_width(notify.message(), room);
        let mut spans = vec![Span::raw(message)];
        if !label.is_empty() {
            spans.push(Span::styled(label, self.styles.toast_action));
        }
        Line::from(spans)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.toast.notify().is_error() {
            self.styles.toast_error
        } else {
            self.styles.toast
        };
        let block = Block::default().borders(Borders::ALL).style(style);
        let inner_width = block.inner(area).width;
        let line = self.line(inner_width);
        Clear.render(area, buf);
        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Longest prefix of `text` that fits in `width` columns, with `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotifyAction;
    use crate::view::styles::ColorConfig;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn toast_expires_after_duration() {
        let now = Instant::now();
        let toast = Toast::new(Notify::text("hi"), now, Duration::from_millis(100));

        assert!(!toast.is_expired(now + Duration::from_millis(99)));
        assert!(toast.is_expired(now + Duration::from_millis(100)));
    }

    #[test]
    fn footprint_includes_margins() {
        let footprint = Toast::footprint();

        assert_eq!(
            footprint.total(),
            f32::from(TOAST_HEIGHT + TOAST_MARGIN_TOP + TOAST_MARGIN_BOTTOM)
        );
    }

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn action_toast_shows_label() {
        let styles = ArticleStyles::new(ColorConfig::with_colors(false), false);
        let toast = Toast::new(
            Notify::action("Removed", "Undo", NotifyAction::ToggleBookmark),
            Instant::now(),
            Duration::from_secs(1),
        );
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).expect("test terminal");

        terminal
            .draw(|frame| frame.render_widget(ToastWidget::new(&toast, &styles), frame.area()))
            .expect("draw toast");

        let buffer = terminal.backend().buffer();
        let row: String = (0..30)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        insta::assert_snapshot!(row.trim_end(), @"│Removed  [Undo (a)]         │");
    }
}
