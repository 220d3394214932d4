use std::time::{Duration, Instant};

use folio_core::carousel::{
    CarouselLayout, InfiniteCarousel, MotionContext, MotionState,
    MotionTuning, PointerEvent, Release,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mounted(items: usize, speed: f32) -> InfiniteCarousel<usize> {
    let mut carousel = InfiniteCarousel::with_layout(
        (0..items).collect(),
        CarouselLayout::new(200.0, 20.0).with_auto_scroll_speed(speed),
    )
    .expect("valid carousel");
    carousel.mount();
    carousel
}

fn in_wrap_band(carousel: &InfiniteCarousel<usize>) -> bool {
    let span = carousel.total_width();
    (span * 0.5..span * 1.5).contains(&carousel.offset())
}

#[test]
fn end_to_end_five_items() {
    let mut carousel = mounted(5, 2.0);
    assert_eq!(carousel.total_width(), 1100.0);
    assert_eq!(carousel.offset(), 1100.0);

    assert_eq!(carousel.tick(), Some(1102.0));

    // 1102 + 2 * 273 = 1648 is the last offset below the upper edge
    for _ in 0..273 {
        carousel.tick();
    }
    assert_eq!(carousel.offset(), 1648.0);

    // 1650 would reach the edge of the band, so this frame wraps by one span
    assert_eq!(carousel.tick(), Some(550.0));
    assert_eq!(carousel.tick(), Some(552.0));
}

#[test]
fn auto_scroll_moves_in_configured_direction() {
    for speed in [2.0_f32, -2.0] {
        let mut carousel = mounted(3, speed);
        let span = carousel.total_width();
        let mut previous = carousel.offset();
        for _ in 0..100 {
            let next = carousel.tick().expect("auto-scroll always moves");
            let mut delta = next - previous;
            // undo the one-span jump of a wrap correction
            if delta.abs() > span / 2.0 {
                delta -= span * delta.signum();
            }
            assert!(delta * speed > 0.0, "speed {speed}, delta {delta}");
            assert!((delta - speed).abs() < 1e-3);
            previous = next;
        }
    }
}

#[test]
fn momentum_decays_into_auto_scroll() {
    let tuning = MotionTuning::default();
    let mut ctx = MotionContext::new(1100.0);
    ctx.fling(50.0);

    let mut frames = 0;
    while ctx.state() == MotionState::MomentumDecay {
        ctx.advance_frame(2.0, 1100.0, &tuning);
        frames += 1;
        assert!(frames < 200, "momentum never settled");
    }

    // ~50 frames of plain friction to reach the blend band, then a handful
    // of blended frames
    assert!((50..=70).contains(&frames), "settled after {frames} frames");
    assert_eq!(ctx.advance_frame(2.0, 1100.0, &tuning), 2.0);
}

#[test]
fn blended_speed_approaches_target_monotonically() {
    let tuning = MotionTuning::default();
    let mut ctx = MotionContext::new(1100.0);
    ctx.fling(50.0);

    let mut last_gap = f32::INFINITY;
    while ctx.state() == MotionState::MomentumDecay {
        let speed = ctx.advance_frame(2.0, 1100.0, &tuning);
        let gap = (speed - 2.0).abs();
        assert!(gap <= last_gap, "gap grew from {last_gap} to {gap}");
        assert!(speed >= 2.0);
        last_gap = gap;
    }
}

#[test]
fn opposing_momentum_snaps_on_the_next_frame() {
    let tuning = MotionTuning::default();
    let mut ctx = MotionContext::new(1100.0);
    ctx.fling(-30.0);
    assert_eq!(ctx.advance_frame(2.0, 1100.0, &tuning), 2.0);
    assert_eq!(ctx.state(), MotionState::AutoScroll);
    assert_eq!(ctx.offset(), 1102.0);

    ctx.fling(30.0);
    assert_eq!(ctx.advance_frame(-2.0, 1100.0, &tuning), -2.0);
    assert_eq!(ctx.state(), MotionState::AutoScroll);
}

#[test]
fn frames_during_a_drag_never_move_the_offset() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, 2.0);

    // Fling first so there is momentum to cancel.
    carousel.pointer_down(600.0, t0);
    carousel.pointer_move(400.0, t0 + Duration::from_millis(20));
    assert!(matches!(carousel.pointer_up(), Release::Momentum(_)));
    assert_eq!(carousel.state(), MotionState::MomentumDecay);

    carousel.pointer_down(400.0, t0 + Duration::from_millis(40));
    assert_eq!(carousel.momentum(), 0.0);
    let held = carousel.offset();
    for _ in 0..30 {
        assert_eq!(carousel.tick(), None);
        assert_eq!(carousel.offset(), held);
    }

    let moved = carousel.pointer_move(350.0, t0 + Duration::from_millis(60));
    assert_eq!(moved, Some(held + 50.0));
    assert_eq!(carousel.tick(), None);
    assert_eq!(carousel.offset(), held + 50.0);
}

#[test]
fn fast_flick_carries_momentum_in_drag_direction() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, 2.0);
    carousel.handle_pointer(PointerEvent::Down { x: 500.0, at: t0 });
    for step in 1..=5 {
        carousel.handle_pointer(PointerEvent::Move {
            x: 500.0 - 30.0 * step as f32,
            at: t0 + Duration::from_millis(10 * step),
        });
    }
    // 3 px/ms leftward at ~16.67 ms/frame
    match carousel.pointer_up() {
        Release::Momentum(m) => assert!((m - 50.01).abs() < 0.05, "{m}"),
        other => panic!("expected momentum, got {other:?}"),
    }
    let before = carousel.offset();
    let next = carousel.tick().unwrap();
    assert!((next - before - 50.01 * 0.95).abs() < 0.05);
}

#[test]
fn release_after_a_pause_ignores_zero_elapsed_samples() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, 2.0);
    carousel.pointer_down(100.0, t0);
    carousel.pointer_move(99.0, t0 + Duration::from_millis(400));
    // duplicate timestamp: velocity must stay finite
    carousel.pointer_move(0.0, t0 + Duration::from_millis(400));
    let velocity = carousel.motion().drag_velocity().unwrap();
    assert!(velocity.is_finite());
    assert_eq!(carousel.pointer_up(), Release::AutoScroll);
}

#[test]
fn back_to_back_moves_do_not_launch_runaway_momentum() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, 2.0);
    let start = carousel.offset();
    carousel.pointer_down(500.0, t0);
    carousel.pointer_move(497.0, t0 + Duration::from_micros(10));
    // the offset still follows every move
    assert_eq!(carousel.offset(), start + 3.0);
    assert_eq!(carousel.motion().drag_velocity(), Some(0.0));
    assert_eq!(carousel.pointer_up(), Release::AutoScroll);
}

#[test]
fn burst_distance_counts_toward_the_next_spaced_move() {
    let t0 = Instant::now();
    let mut carousel = mounted(5, 2.0);
    carousel.pointer_down(500.0, t0);
    carousel.pointer_move(497.0, t0 + Duration::from_micros(10));
    carousel.pointer_move(490.0, t0 + Duration::from_millis(10));
    // 10 px over 10 ms
    match carousel.pointer_up() {
        Release::Momentum(momentum) => {
            assert!((momentum - 16.67).abs() < 1e-3, "{momentum}")
        }
        other => panic!("expected momentum, got {other:?}"),
    }
}

#[test]
fn random_interaction_keeps_offset_in_wrap_band() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca20);
    for items in [1usize, 2, 5, 12] {
        let speed = if rng.random_bool(0.5) { 2.0 } else { -2.0 };
        let mut carousel = mounted(items, speed);
        let mut now = Instant::now();
        let mut x = 400.0_f32;

        for _ in 0..2_000 {
            now += Duration::from_millis(rng.random_range(0..=20));
            match rng.random_range(0..10) {
                0 => carousel.pointer_down(x, now),
                1 | 2 => {
                    x += rng.random_range(-300.0..300.0);
                    carousel.pointer_move(x, now);
                }
                3 => {
                    carousel.pointer_up();
                }
                4 => {
                    carousel.handle_pointer(PointerEvent::Cancel);
                }
                _ => {
                    carousel.tick();
                }
            }

            if !carousel.is_dragging() {
                assert!(
                    in_wrap_band(&carousel),
                    "offset {} outside band for span {}",
                    carousel.offset(),
                    carousel.total_width()
                );
            } else {
                let limit = carousel.total_width() * 2.0;
                assert!((0.0..=limit).contains(&carousel.offset()));
            }
        }
    }
}
