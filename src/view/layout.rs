//! Screen geometry and the per-frame draw.
//!
//! Offsets from the scroll coordinator are fractional rows; they are rounded
//! once here. A translated rect is clipped to the frame, and a rect pushed
//! fully off screen is not drawn.

use super::constants::{
    SUBMENU_WIDTH, TOAST_HEIGHT, TOAST_MARGIN_BOTTOM, TOOLBAR_HEIGHT,
};
use super::highlight::{HighlightStyles, highlighted_lines};
use super::screen::ArticleScreen;
use super::styles::ArticleStyles;
use super::toast::{Toast, ToastWidget};
use super::widgets::{BottomBar, Submenu, Toolbar};
use crate::scroll::ScrollCoordinator;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    widgets::{Block, Paragraph, Wrap},
};

/// Whole rows for a fractional offset or height.
pub fn rows(value: f32) -> u16 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // Saturating float-to-int cast.
        value.round().min(f32::from(u16::MAX)) as u16
    }
}

/// `rect` moved down by `by` rows and clipped to `bounds`.
pub fn translate_down(rect: Rect, by: u16, bounds: Rect) -> Option<Rect> {
    let top = rect.y.saturating_add(by);
    let bottom = rect.bottom().saturating_add(by).min(bounds.bottom());
    if top >= bottom || rect.width == 0 {
        return None;
    }
    Some(Rect::new(rect.x, top, rect.width, bottom - top))
}

/// Positional inputs read from the scroll coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Bar height.
    pub bar_height: u16,
    /// Rows the bar is pushed down.
    pub bar_offset: u16,
    /// Gap between submenu and bar.
    pub bar_top_margin: u16,
    /// Submenu height.
    pub submenu_height: u16,
    /// Rows the submenu is pushed down.
    pub submenu_offset: u16,
}

impl Placement {
    /// Round the coordinator offsets to whole rows.
    pub fn from_coordinator(coordinator: &ScrollCoordinator) -> Self {
        Self {
            bar_height: rows(coordinator.bar_height()),
            bar_offset: rows(coordinator.bar_offset()),
            bar_top_margin: rows(coordinator.bar_top_margin()),
            submenu_height: rows(coordinator.submenu_height()),
            submenu_offset: rows(coordinator.submenu_offset()),
        }
    }
}

/// Where every part of the screen goes this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row area.
    pub toolbar: Rect,
    /// Article body area.
    pub content: Rect,
    /// Visible part of the bottom bar.
    pub bar: Option<Rect>,
    /// Visible part of the submenu, when open.
    pub submenu: Option<Rect>,
    /// Toast area, when one is shown.
    pub toast: Option<Rect>,
}

impl ScreenLayout {
    /// Lay out a frame of `area`.
    ///
    /// Parts pushed out of the frame are `None`; partially visible ones are clipped.
    pub fn compute(
        area: Rect,
        placement: Placement,
        search_visible: bool,
        submenu_open: bool,
        toast_visible: bool,
    ) -> Self {
        let toolbar_height = TOOLBAR_HEIGHT.min(area.height);
        let toolbar = Rect::new(area.x, area.y, area.width, toolbar_height);
        let body_top = toolbar.bottom();

        let bar_height = placement.bar_height.min(area.height.saturating_sub(toolbar_height));
        let bar_rest = Rect::new(
            area.x,
            area.bottom().saturating_sub(bar_height),
            area.width,
            bar_height,
        );
        let bar = translate_down(bar_rest, placement.bar_offset, area);

        // The search bar must never cover text, so content stops above it.
        let content_bottom = if search_visible {
            bar_rest.y
        } else {
            area.bottom()
        };
        let content = Rect::new(
            area.x,
            body_top,
            area.width,
            content_bottom.saturating_sub(body_top),
        );

        let submenu = submenu_open
            .then(|| {
                let width = SUBMENU_WIDTH.min(area.width);
                let bottom = bar_rest.y.saturating_sub(placement.bar_top_margin);
                let top = bottom
                    .saturating_sub(placement.submenu_height)
                    .max(body_top);
                let rest = Rect::new(
                    area.right().saturating_sub(width),
                    top,
                    width,
                    bottom.saturating_sub(top),
                );
                translate_down(rest, placement.submenu_offset, area)
            })
            .flatten();

        let toast = toast_visible
            .then(|| {
                let bar_top = bar_rest.y.saturating_add(placement.bar_offset).min(area.bottom());
                let bottom = bar_top.saturating_sub(TOAST_MARGIN_BOTTOM);
                let top = bottom.saturating_sub(TOAST_HEIGHT);
                (top >= body_top && bottom > top).then(|| {
                    Rect::new(
                        area.x.saturating_add(1),
                        top,
                        area.width.saturating_sub(2),
                        bottom - top,
                    )
                })
            })
            .flatten();

        Self {
            toolbar,
            content,
            bar,
            submenu,
            toast,
        }
    }
}

/// Draw one frame.
pub fn render_screen(
    frame: &mut Frame,
    screen: &mut ArticleScreen,
    placement: Placement,
    styles: &ArticleStyles,
    toast: Option<&Toast>,
) -> ScreenLayout {
    let area = frame.area();
    let layout = ScreenLayout::compute(
        area,
        placement,
        screen.search_bar_visible,
        screen.submenu_open,
        toast.is_some(),
    );

    frame.render_widget(Block::default().style(styles.base), area);
    frame.render_widget(Toolbar::new(screen, styles), layout.toolbar);

    // Scroll counts logical lines and each takes at least one row, so the
    // pane never shows more than `height` lines past the top one.
    screen.apply_pending_reveal(layout.content.height);
    let top = usize::from(screen.content_scroll());
    let lines = highlighted_lines(
        screen.content(),
        screen.decorations(),
        top..top + usize::from(layout.content.height),
        HighlightStyles {
            search_match: styles.search_match,
            search_focus: styles.search_focus,
        },
    );
    let text_style = if screen.is_big_text() {
        styles.base.add_modifier(Modifier::BOLD)
    } else {
        styles.base
    };
    let content = Paragraph::new(lines)
        .style(text_style)
        .wrap(Wrap { trim: false });
    frame.render_widget(content, layout.content);

    if let Some(rect) = layout.bar {
        frame.render_widget(BottomBar::new(screen, styles), rect);
    }
    if let Some(rect) = layout.submenu {
        frame.render_widget(Submenu::new(screen, styles), rect);
    }
    if let (Some(rect), Some(toast)) = (layout.toast, toast) {
        frame.render_widget(ToastWidget::new(toast, styles), rect);
    }

    layout
}
