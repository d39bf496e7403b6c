//! Scroll coordination between the bottom bar and the submenu.
//!
//! Gestures from the scrolling container drive the bottom bar offset. Views
//! whose position depends on another view are wired as named offset nodes:
//! a node publishes after its offset changes and every subscriber of that
//! node recomputes its own offset. The submenu subscribes to the bottom bar
//! and to the transient overlay.
//!
//! All of this runs on the UI thread. Animations are sampled by the host's
//! frame callback through [`ScrollCoordinator::tick`].

pub mod animator;
pub mod bottom_bar;
pub mod submenu;

pub use animator::{OffsetAnimator, SNAP_DURATION, decelerate};
pub use bottom_bar::{BottomBarBehavior, GestureKind, GesturePhase, ScrollAxis};
pub use submenu::{OverlayFootprint, SubmenuBehavior, submenu_offset};

use std::time::{Duration, Instant};
use tracing::debug;

/// Named offset node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetNode {
    /// The bottom action bar.
    BottomBar,
    /// The settings submenu.
    Submenu,
    /// The transient toast above the bar.
    Overlay,
}

/// `subscriber` recomputes whenever `source` publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    /// Node that recomputes.
    pub subscriber: OffsetNode,
    /// Node whose change triggers it.
    pub source: OffsetNode,
}

/// Geometry and snapping settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Bottom bar height in rows.
    pub bar_height: f32,
    /// Rows between submenu and bar.
    pub bar_top_margin: f32,
    /// Submenu height in rows.
    pub submenu_height: f32,
    /// Snap the bar when a gesture ends.
    pub snap_enabled: bool,
    /// Snap animation length.
    pub snap_duration: Duration,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bar_height: 3.0,
            bar_top_margin: 0.0,
            submenu_height: 5.0,
            snap_enabled: true,
            snap_duration: SNAP_DURATION,
        }
    }
}

/// Owner of the bar, submenu and overlay offsets.
///
/// Gesture and overlay events go in; offsets are read back per frame.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    bar: BottomBarBehavior,
    submenu: SubmenuBehavior,
    overlay_height: f32,
    subscriptions: Vec<Subscription>,
}

impl ScrollCoordinator {
    /// Coordinator with the submenu subscribed to the bar and the overlay.
    pub fn new(config: ScrollConfig) -> Self {
        let mut coordinator = Self {
            bar: BottomBarBehavior::new(
                config.bar_height,
                config.snap_enabled,
                config.snap_duration,
            ),
            submenu: SubmenuBehavior::new(config.submenu_height, config.bar_top_margin),
            overlay_height: 0.0,
            subscriptions: Vec::new(),
        };
        coordinator.subscribe(OffsetNode::Submenu, OffsetNode::BottomBar);
        coordinator.subscribe(OffsetNode::Submenu, OffsetNode::Overlay);
        coordinator
    }

    /// Register `subscriber` as dependent on `source`.
    pub fn subscribe(&mut self, subscriber: OffsetNode, source: OffsetNode) {
        let subscription = Subscription { subscriber, source };
        if !self.subscriptions.contains(&subscription) {
            self.subscriptions.push(subscription);
        }
    }

    /// Registered subscriptions, in registration order.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    // ===== Gesture intake =====

    /// Returns whether the gesture was accepted (vertical only).
    pub fn on_gesture_start(&mut self, axis: ScrollAxis, kind: GestureKind) -> bool {
        self.bar.on_gesture_start(axis, kind)
    }

    /// Scroll delta in rows, positive downwards.
    pub fn on_gesture_delta(&mut self, dy: f32) {
        if self.bar.on_gesture_delta(dy) {
            self.publish(OffsetNode::BottomBar);
        }
    }

    /// Gesture finished; may start a snap.
    pub fn on_gesture_end(&mut self, kind: GestureKind, now: Instant) {
        if let Some(target) = self.bar.on_gesture_end(kind, now) {
            debug!(target, "Gesture ended with snap");
        }
    }

    /// Frame callback. Returns whether any offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.bar.tick(now) {
            return false;
        }
        self.publish(OffsetNode::BottomBar);
        true
    }

    /// Animate the bar to shown or hidden, replacing any running snap.
    pub fn snap_bar(&mut self, visible: bool, now: Instant) {
        self.bar.animate_visibility(visible, now);
    }

    /// Resize the bar, clamping its offset.
    pub fn set_bar_height(&mut self, height: f32) {
        if self.bar.set_height(height) {
            self.publish(OffsetNode::BottomBar);
        }
    }

    // ===== Overlay lifecycle =====

    /// A toast appeared above the bar.
    pub fn on_overlay_shown(&mut self, footprint: OverlayFootprint) {
        self.overlay_height = footprint.total();
        debug!(height = self.overlay_height, "Overlay shown");
        self.publish(OffsetNode::Overlay);
    }

    /// The toast went away.
    pub fn on_overlay_hidden(&mut self) {
        self.overlay_height = 0.0;
        debug!("Overlay hidden");
        self.publish(OffsetNode::Overlay);
    }

    // ===== Readouts =====

    /// Bar offset in rows.
    pub fn bar_offset(&self) -> f32 {
        self.bar.offset()
    }

    /// Bar height in rows.
    pub fn bar_height(&self) -> f32 {
        self.bar.height()
    }

    /// Submenu offset in rows.
    pub fn submenu_offset(&self) -> f32 {
        self.submenu.offset()
    }

    /// Submenu height in rows.
    pub fn submenu_height(&self) -> f32 {
        self.submenu.view_height()
    }

    /// Gap between submenu and bar.
    pub fn bar_top_margin(&self) -> f32 {
        self.submenu.bar_top_margin()
    }

    /// Footprint of the shown toast, 0 without one.
    pub fn overlay_height(&self) -> f32 {
        self.overlay_height
    }

    /// Gesture phase of the bar.
    pub fn phase(&self) -> GesturePhase {
        self.bar.phase()
    }

    /// Whether a snap is running.
    pub fn is_animating(&self) -> bool {
        self.bar.is_animating()
    }

    // ===== Publish/subscribe =====

    fn publish(&mut self, source: OffsetNode) {
        let subscribers: Vec<OffsetNode> = self
            .subscriptions
            .iter()
            .filter(|s| s.source == source)
            .map(|s| s.subscriber)
            .collect();
        for subscriber in subscribers {
            self.deliver(subscriber, source);
        }
    }

    fn deliver(&mut self, subscriber: OffsetNode, source: OffsetNode) {
        match (subscriber, source) {
            (OffsetNode::Submenu, OffsetNode::BottomBar) => {
                self.submenu.on_bar_moved(self.bar.offset());
            }
            (OffsetNode::Submenu, OffsetNode::Overlay) => {
                self.submenu.on_overlay_changed(self.overlay_height);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
