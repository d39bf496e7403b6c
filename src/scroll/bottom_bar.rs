//! Bottom action bar offset handling.
//!
//! Scroll deltas translate the bar between fully shown (offset 0) and fully
//! hidden (offset = bar height). When a gesture ends the bar snaps to the
//! nearest edge with a short decelerating animation.

use super::animator::OffsetAnimator;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Axis of a nested scroll gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    /// Along the content. Drives the bar.
    Vertical,
    /// Across the content. Ignored.
    Horizontal,
}

/// Origin of a gesture's deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Deltas driven directly by the user.
    Touch,
    /// Deltas produced after release (fling/inertia).
    Fling,
}

/// Per-gesture state machine of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture and no animation.
    #[default]
    Idle,
    /// Deltas are moving the bar.
    Scrolling,
    /// Animating to shown or hidden.
    Snapping,
}

/// Offset of the bottom action bar, clamped to `[0, height]`.
#[derive(Debug, Clone)]
pub struct BottomBarBehavior {
    height: f32,
    offset: f32,
    snap_enabled: bool,
    snap_duration: Duration,
    phase: GesturePhase,
    last_started: GestureKind,
    animator: Option<OffsetAnimator>,
}

impl BottomBarBehavior {
    /// Bar of `height` rows, fully shown.
    pub fn new(height: f32, snap_enabled: bool, snap_duration: Duration) -> Self {
        Self {
            height: height.max(0.0),
            offset: 0.0,
            snap_enabled,
            snap_duration,
            phase: GesturePhase::Idle,
            last_started: GestureKind::Touch,
            animator: None,
        }
    }

    /// Rows the bar is pushed down by.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Bar height in rows.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether a snap is running.
    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }

    /// Accept or reject a starting gesture. Accepting cancels any snap.
    pub fn on_gesture_start(&mut self, axis: ScrollAxis, kind: GestureKind) -> bool {
        if axis != ScrollAxis::Vertical {
            return false;
        }
        self.last_started = kind;
        self.cancel_animation();
        true
    }

    /// Apply one delta. Positive `dy` scrolls content down and hides the bar.
    ///
    /// Returns whether the offset moved.
    pub fn on_gesture_delta(&mut self, dy: f32) -> bool {
        self.cancel_animation();
        self.phase = GesturePhase::Scrolling;
        let next = (self.offset + dy).clamp(0.0, self.height);
        trace!(dy, offset = next, "Bar delta");
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    /// Finish the gesture, snapping to the nearest edge when enabled.
    ///
    /// Returns the snap target if an animation started.
    pub fn on_gesture_end(&mut self, kind: GestureKind, now: Instant) -> Option<f32> {
        let should_snap = self.snap_enabled
            && (self.last_started == GestureKind::Touch || kind == GestureKind::Fling);
        if !should_snap {
            if self.phase == GesturePhase::Scrolling {
                self.phase = GesturePhase::Idle;
            }
            return None;
        }
        let visible = self.offset < self.height * 0.5;
        self.animate_visibility(visible, now)
    }

    /// Animate to fully shown or fully hidden, replacing any running animation.
    pub fn animate_visibility(&mut self, visible: bool, now: Instant) -> Option<f32> {
        self.cancel_animation();
        let target = if visible { 0.0 } else { self.height };
        if target == self.offset {
            self.phase = GesturePhase::Idle;
            return None;
        }
        debug!(from = self.offset, to = target, "Bar snap started");
        self.animator = Some(OffsetAnimator::start(
            self.offset,
            target,
            now,
            self.snap_duration,
        ));
        self.phase = GesturePhase::Snapping;
        Some(target)
    }

    /// Advance the running animation. Returns whether the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(animator) = self.animator else {
            return false;
        };
        let next = animator.sample(now).clamp(0.0, self.height);
        let moved = next != self.offset;
        self.offset = next;
        if animator.is_finished(now) {
            self.animator = None;
            self.phase = GesturePhase::Idle;
        }
        moved
    }

    /// Change the bar height, keeping the offset in range.
    pub fn set_height(&mut self, height: f32) -> bool {
        self.cancel_animation();
        self.height = height.max(0.0);
        let next = self.offset.min(self.height);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    fn cancel_animation(&mut self) {
        if self.animator.take().is_some() {
            debug!(offset = self.offset, "Bar snap cancelled");
            self.phase = GesturePhase::Idle;
        }
    }
}
