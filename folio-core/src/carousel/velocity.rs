use std::time::{Duration, Instant};

/// Samples closer than this to the reference sample are folded into the next
/// one. Move events stamped on arrival can land microseconds apart.
pub const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Tracks the most recent pointer sample during a drag and the instantaneous
/// velocity between the last two samples, in px/ms.
///
/// Velocity is positive when the pointer moves left, i.e. in the direction
/// that advances the scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct VelocityTracker {
    last_x: f32,
    last_at: Instant,
    velocity: f32,
}

impl VelocityTracker {
    pub fn new(x: f32, at: Instant) -> Self {
        Self {
            last_x: x,
            last_at: at,
            velocity: 0.0,
        }
    }

    /// Record a pointer sample.
    ///
    /// A sample less than [`MIN_SAMPLE_INTERVAL`] after the reference sample
    /// is merged into the next one: velocity and reference stay put, and the
    /// distance it covered is measured over the longer interval that follows.
    pub fn record(&mut self, x: f32, at: Instant) {
        let elapsed = at.saturating_duration_since(self.last_at);
        if elapsed < MIN_SAMPLE_INTERVAL {
            return;
        }
        let dt_ms = elapsed.as_secs_f64() * 1000.0;
        let v = ((self.last_x - x) as f64 / dt_ms) as f32;
        if v.is_finite() {
            self.velocity = v;
        }
        self.last_x = x;
        self.last_at = at;
    }

    /// Last computed velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Position of the reference sample velocity is measured from.
    pub fn last_x(&self) -> f32 {
        self.last_x
    }
}
