//! Motion context: scroll offset plus the single active motion regime.
//!
//! All tuning values are per-frame quantities except the release threshold,
//! which is compared against the pointer velocity in px/ms before it is
//! converted to px/frame.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::error::CarouselError;
use super::velocity::VelocityTracker;
use super::wrap::wrap_correct;

pub const FRICTION: f32 = 0.95;
pub const TRANSITION_THRESHOLD_PX_PER_FRAME: f32 = 2.0;
pub const RELEASE_VELOCITY_THRESHOLD_PX_PER_MS: f32 = 0.01;
pub const SETTLE_EPSILON_PX_PER_FRAME: f32 = 0.2;
pub const FRAME_INTERVAL_MS: f32 = 16.67;
pub const MIN_MOMENTUM_PX_PER_FRAME: f32 = 0.01;

/// Friction and blend constants for the momentum model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Multiplier applied to momentum once per frame.
    pub friction: f32,
    /// Distance from the target speed (px/frame) at which momentum starts
    /// blending into auto-scroll.
    pub transition_threshold: f32,
    /// Minimum release velocity (px/ms) that produces momentum.
    pub release_velocity_threshold: f32,
    /// Distance from the target speed (px/frame) treated as settled.
    pub settle_epsilon: f32,
    /// Nominal frame duration used to convert px/ms into px/frame.
    pub frame_interval_ms: f32,
    /// Momentum magnitude (px/frame) at or below which it is spent.
    pub min_momentum: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            transition_threshold: TRANSITION_THRESHOLD_PX_PER_FRAME,
            release_velocity_threshold: RELEASE_VELOCITY_THRESHOLD_PX_PER_MS,
            settle_epsilon: SETTLE_EPSILON_PX_PER_FRAME,
            frame_interval_ms: FRAME_INTERVAL_MS,
            min_momentum: MIN_MOMENTUM_PX_PER_FRAME,
        }
    }
}

impl MotionTuning {
    pub fn validate(&self) -> Result<(), CarouselError> {
        let invalid =
            |field, value| CarouselError::InvalidTuning { field, value };

        if !(self.friction.is_finite()
            && self.friction > 0.0
            && self.friction < 1.0)
        {
            return Err(invalid("friction", self.friction));
        }
        let positive = [
            ("transition_threshold", self.transition_threshold),
            ("release_velocity_threshold", self.release_velocity_threshold),
            ("settle_epsilon", self.settle_epsilon),
            ("frame_interval_ms", self.frame_interval_ms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, value));
            }
        }
        if !(self.min_momentum.is_finite() && self.min_momentum >= 0.0) {
            return Err(invalid("min_momentum", self.min_momentum));
        }
        Ok(())
    }

    /// Convert a pointer velocity (px/ms) into per-frame momentum.
    pub fn momentum_for(&self, velocity_px_per_ms: f32) -> f32 {
        velocity_px_per_ms * self.frame_interval_ms
    }
}

/// Observable motion regime. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    AutoScroll,
    Dragging,
    MomentumDecay,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f32,
    base_offset: f32,
    tracker: VelocityTracker,
}

#[derive(Debug, Clone, Copy, Default)]
enum Motion {
    #[default]
    AutoScroll,
    Dragging(DragSession),
    MomentumDecay {
        momentum: f32,
    },
}

/// Result of ending a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No drag was in progress.
    Ignored,
    /// Release was too slow to carry momentum.
    AutoScroll,
    /// Release carried momentum in px/frame.
    Momentum(f32),
}

/// Scroll offset and motion regime owned by one carousel instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionContext {
    offset: f32,
    motion: Motion,
}

impl MotionContext {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            motion: Motion::AutoScroll,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn state(&self) -> MotionState {
        match self.motion {
            Motion::AutoScroll => MotionState::AutoScroll,
            Motion::Dragging(_) => MotionState::Dragging,
            Motion::MomentumDecay { .. } => MotionState::MomentumDecay,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    /// Residual momentum in px/frame, zero outside momentum decay.
    pub fn momentum(&self) -> f32 {
        match self.motion {
            Motion::MomentumDecay { momentum } => momentum,
            _ => 0.0,
        }
    }

    /// Pointer velocity of the drag in progress, in px/ms.
    pub fn drag_velocity(&self) -> Option<f32> {
        match self.motion {
            Motion::Dragging(session) => Some(session.tracker.velocity()),
            _ => None,
        }
    }

    /// Place the offset directly, e.g. when centring on mount.
    pub fn reset(&mut self, offset: f32) {
        self.offset = offset;
        self.motion = Motion::AutoScroll;
    }

    /// Enter momentum decay with the given per-frame momentum.
    pub fn fling(&mut self, momentum: f32) {
        self.motion = Motion::MomentumDecay { momentum };
    }

    pub(crate) fn rescale(&mut self, old_span: f32, new_span: f32) {
        if old_span > 0.0 && new_span > 0.0 {
            self.offset =
                wrap_correct(self.offset, old_span) / old_span * new_span;
        }
    }

    /// Begin a drag. Any in-flight momentum is dropped immediately so the
    /// next frame cannot move the offset.
    pub fn begin_drag(&mut self, x: f32, at: Instant) {
        self.motion = Motion::Dragging(DragSession {
            start_x: x,
            base_offset: self.offset,
            tracker: VelocityTracker::new(x, at),
        });
    }

    /// Follow the pointer while dragging. The offset is clamped to
    /// `[0, max_offset]` rather than wrap-corrected. Returns the new offset,
    /// or `None` when no drag is in progress.
    pub fn drag_to(
        &mut self,
        x: f32,
        at: Instant,
        max_offset: f32,
    ) -> Option<f32> {
        let Motion::Dragging(session) = &mut self.motion else {
            return None;
        };
        let next = session.base_offset - (x - session.start_x);
        self.offset = if next.is_finite() {
            next.clamp(0.0, max_offset.max(0.0))
        } else {
            session.base_offset
        };
        session.tracker.record(x, at);
        Some(self.offset)
    }

    /// End a drag, deciding between momentum and auto-scroll from the last
    /// recorded velocity. The velocity sample is discarded.
    pub fn end_drag(
        &mut self,
        total_width: f32,
        tuning: &MotionTuning,
    ) -> Release {
        let Motion::Dragging(session) = self.motion else {
            return Release::Ignored;
        };

        let velocity = session.tracker.velocity();
        let release = if velocity.abs() > tuning.release_velocity_threshold {
            let momentum = tuning.momentum_for(velocity);
            self.motion = Motion::MomentumDecay { momentum };
            Release::Momentum(momentum)
        } else {
            self.motion = Motion::AutoScroll;
            Release::AutoScroll
        };
        self.offset = wrap_correct(self.offset, total_width);
        release
    }

    /// Abandon a drag without producing momentum.
    pub fn cancel_drag(&mut self) {
        if self.is_dragging() {
            self.motion = Motion::AutoScroll;
        }
    }

    /// Advance one animation frame.
    ///
    /// Returns the displacement applied this frame; zero while dragging or
    /// when the resulting speed is zero.
    pub fn advance_frame(
        &mut self,
        target_speed: f32,
        total_width: f32,
        tuning: &MotionTuning,
    ) -> f32 {
        let speed = match self.motion {
            Motion::Dragging(_) => return 0.0,
            Motion::AutoScroll => target_speed,
            Motion::MomentumDecay { momentum } => {
                self.decay(momentum, target_speed, tuning)
            }
        };

        if speed == 0.0 {
            return 0.0;
        }
        self.offset = wrap_correct(self.offset + speed, total_width);
        speed
    }

    /// Apply friction and pick this frame's speed. Momentum that opposes the
    /// target or has run out settles into auto-scroll immediately.
    fn decay(
        &mut self,
        momentum: f32,
        target: f32,
        tuning: &MotionTuning,
    ) -> f32 {
        if momentum.abs() <= tuning.min_momentum {
            self.motion = Motion::AutoScroll;
            return target;
        }

        let momentum = momentum * tuning.friction;
        self.motion = Motion::MomentumDecay { momentum };

        if opposes(momentum, target) {
            self.motion = Motion::AutoScroll;
            return target;
        }

        let gap = (momentum - target).abs();
        if gap < tuning.transition_threshold {
            let blend = gap / tuning.transition_threshold;
            let mut blended = momentum * blend + target * (1.0 - blend);
            if blended.abs() < target.abs() {
                blended = target;
            }
            if (blended - target).abs() < tuning.settle_epsilon {
                self.motion = Motion::AutoScroll;
                return target;
            }
            return blended;
        }

        if momentum.abs() < tuning.settle_epsilon {
            self.motion = Motion::AutoScroll;
            return target;
        }
        momentum
    }
}

/// True when the two values point in different directions. Zero has no
/// direction, so any momentum opposes a zero target.
fn opposes(momentum: f32, target: f32) -> bool {
    direction(momentum) != direction(target)
}

fn direction(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SPAN: f32 = 1100.0;

    #[test]
    fn default_tuning_is_valid() {
        assert!(MotionTuning::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_friction() {
        let tuning = MotionTuning {
            friction: 1.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(CarouselError::InvalidTuning {
                field: "friction",
                value: 1.0
            })
        );
    }

    #[test]
    fn auto_scroll_advances_by_target() {
        let mut ctx = MotionContext::new(SPAN);
        let moved = ctx.advance_frame(2.0, SPAN, &MotionTuning::default());
        assert_eq!(moved, 2.0);
        assert_eq!(ctx.offset(), 1102.0);
    }

    #[test]
    fn opposing_momentum_snaps_to_target() {
        let mut ctx = MotionContext::new(SPAN);
        ctx.fling(-30.0);
        let moved = ctx.advance_frame(2.0, SPAN, &MotionTuning::default());
        assert_eq!(moved, 2.0);
        assert_eq!(ctx.state(), MotionState::AutoScroll);
        assert_eq!(ctx.momentum(), 0.0);
    }

    #[test]
    fn strong_momentum_applies_after_friction() {
        let mut ctx = MotionContext::new(SPAN);
        ctx.fling(40.0);
        let moved = ctx.advance_frame(2.0, SPAN, &MotionTuning::default());
        assert!((moved - 38.0).abs() < 1e-4);
        assert_eq!(ctx.state(), MotionState::MomentumDecay);
    }

    #[test]
    fn blend_never_drops_below_target_speed() {
        let mut ctx = MotionContext::new(SPAN);
        // 2.1 * 0.95 = 1.995, inside the blend band and below the target
        ctx.fling(2.1);
        let moved = ctx.advance_frame(2.0, SPAN, &MotionTuning::default());
        assert_eq!(moved, 2.0);
        assert_eq!(ctx.state(), MotionState::AutoScroll);
    }

    #[test]
    fn blend_mixes_momentum_and_target() {
        let mut ctx = MotionContext::new(SPAN);
        // 3.6 * 0.95 = 3.42; gap 1.42, blend 0.71
        ctx.fling(3.6);
        let moved = ctx.advance_frame(2.0, SPAN, &MotionTuning::default());
        let expected = 3.42 * 0.71 + 2.0 * 0.29;
        assert!((moved - expected).abs() < 1e-3, "moved {moved}");
        assert_eq!(ctx.state(), MotionState::MomentumDecay);
    }

    #[test]
    fn spent_momentum_runs_at_target() {
        let mut ctx = MotionContext::new(SPAN);
        ctx.fling(0.005);
        let moved = ctx.advance_frame(-2.0, SPAN, &MotionTuning::default());
        assert_eq!(moved, -2.0);
        assert_eq!(ctx.state(), MotionState::AutoScroll);
    }

    #[test]
    fn zero_target_settles_any_momentum() {
        let mut ctx = MotionContext::new(SPAN);
        ctx.fling(12.0);
        let moved = ctx.advance_frame(0.0, SPAN, &MotionTuning::default());
        assert_eq!(moved, 0.0);
        assert_eq!(ctx.state(), MotionState::AutoScroll);
        assert_eq!(ctx.offset(), SPAN);
    }

    #[test]
    fn drag_ignores_frames_and_release_wraps() {
        let tuning = MotionTuning::default();
        let t0 = Instant::now();
        let mut ctx = MotionContext::new(SPAN);

        ctx.begin_drag(500.0, t0);
        assert_eq!(ctx.advance_frame(2.0, SPAN, &tuning), 0.0);
        assert_eq!(ctx.offset(), SPAN);

        // Pull far to the right: offset drops below the wrap band.
        let offset = ctx.drag_to(1200.0, t0 + Duration::from_millis(100), 2.0 * SPAN);
        assert_eq!(offset, Some(400.0));

        let release = ctx.end_drag(SPAN, &tuning);
        assert!(matches!(release, Release::Momentum(m) if m < 0.0));
        assert_eq!(ctx.offset(), 1500.0);
    }

    #[test]
    fn drag_clamps_to_bounds() {
        let t0 = Instant::now();
        let mut ctx = MotionContext::new(SPAN);
        ctx.begin_drag(0.0, t0);
        let offset = ctx.drag_to(-5000.0, t0 + Duration::from_millis(5), 2.0 * SPAN);
        assert_eq!(offset, Some(2.0 * SPAN));
    }

    #[test]
    fn slow_release_returns_to_auto_scroll() {
        let tuning = MotionTuning::default();
        let t0 = Instant::now();
        let mut ctx = MotionContext::new(SPAN);
        ctx.begin_drag(100.0, t0);
        ctx.drag_to(99.0, t0 + Duration::from_millis(500), 2.0 * SPAN);
        assert_eq!(ctx.end_drag(SPAN, &tuning), Release::AutoScroll);
        assert_eq!(ctx.state(), MotionState::AutoScroll);
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut ctx = MotionContext::new(SPAN);
        ctx.fling(10.0);
        assert_eq!(
            ctx.end_drag(SPAN, &MotionTuning::default()),
            Release::Ignored
        );
        assert_eq!(ctx.state(), MotionState::MomentumDecay);
    }
}
