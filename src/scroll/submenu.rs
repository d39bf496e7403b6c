//! Submenu offset, dependent on the bottom bar and the transient overlay.

/// Vertical footprint of a transient overlay (toast).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayFootprint {
    /// Overlay height.
    pub height: f32,
    /// Space above it.
    pub margin_top: f32,
    /// Space between it and the bar.
    pub margin_bottom: f32,
}

impl OverlayFootprint {
    /// Footprint from its three parts.
    pub fn new(height: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            height,
            margin_top,
            margin_bottom,
        }
    }

    /// Height plus both margins.
    pub fn total(&self) -> f32 {
        self.margin_top + self.height + self.margin_bottom
    }
}

/// Submenu translation for a given bar offset.
///
/// While the bar is fully shown the submenu stays put; once the bar starts
/// moving the submenu is pushed out by its own height, the bar's top margin,
/// the bar offset and any overlay above the bar.
pub fn submenu_offset(
    bar_offset: f32,
    view_height: f32,
    bar_top_margin: f32,
    overlay_height: f32,
) -> f32 {
    if bar_offset > 0.0 {
        view_height + bar_top_margin + bar_offset + overlay_height
    } else {
        0.0
    }
}

/// Submenu offset, recomputed when the bar or the overlay publishes.
#[derive(Debug, Clone)]
pub struct SubmenuBehavior {
    view_height: f32,
    bar_top_margin: f32,
    bar_offset: f32,
    overlay_height: f32,
    offset: f32,
}

impl SubmenuBehavior {
    /// Submenu of `view_height` rows, resting in place.
    pub fn new(view_height: f32, bar_top_margin: f32) -> Self {
        Self {
            view_height,
            bar_top_margin,
            bar_offset: 0.0,
            overlay_height: 0.0,
            offset: 0.0,
        }
    }

    /// Rows the submenu is pushed down by.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Submenu height.
    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Gap kept above the bar.
    pub fn bar_top_margin(&self) -> f32 {
        self.bar_top_margin
    }

    /// Bar offset changed. Returns whether the submenu moved.
    pub fn on_bar_moved(&mut self, bar_offset: f32) -> bool {
        self.bar_offset = bar_offset;
        self.recompute()
    }

    /// Overlay shown or hidden. Returns whether the submenu moved.
    pub fn on_overlay_changed(&mut self, overlay_height: f32) -> bool {
        self.overlay_height = overlay_height;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let next = submenu_offset(
            self.bar_offset,
            self.view_height,
            self.bar_top_margin,
            self.overlay_height,
        );
        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_sums_margins_and_height() {
        assert_eq!(OverlayFootprint::new(3.0, 1.0, 0.5).total(), 4.5);
    }

    #[test]
    fn shown_bar_keeps_submenu_in_place() {
        assert_eq!(submenu_offset(0.0, 5.0, 1.0, 4.0), 0.0);
    }

    #[test]
    fn moving_bar_pushes_submenu_out() {
        assert_eq!(submenu_offset(1.5, 5.0, 1.0, 0.0), 7.5);
    }

    #[test]
    fn overlay_change_recomputes_offset() {
        let mut submenu = SubmenuBehavior::new(5.0, 0.0);
        submenu.on_bar_moved(2.0);

        assert!(submenu.on_overlay_changed(3.0));
        assert_eq!(submenu.offset(), 10.0);
    }
}
