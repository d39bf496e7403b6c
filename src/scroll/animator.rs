//! Time-driven offset interpolation.

use std::time::{Duration, Instant};

/// Default snap animation length.
pub const SNAP_DURATION: Duration = Duration::from_millis(200);

/// Decelerating curve `1 - (1 - t)^2`: fast start, eases into the target.
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// One in-flight animation of a single offset from `from` to `to`.
///
/// Sampled by the frame callback with the current instant; it holds no
/// timer of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnimator {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl OffsetAnimator {
    /// Begin animating at `now`.
    pub fn start(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
        }
    }

    /// Final value.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated value at `now`. Exactly `to` once the duration elapsed.
    pub fn sample(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * decelerate(t)
    }

    /// Whether the duration has elapsed at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
