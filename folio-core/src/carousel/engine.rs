//! InfiniteCarousel: one carousel instance and its motion context.

use std::ops::Range;
use std::time::Instant;

use super::error::CarouselError;
use super::layout::CarouselLayout;
use super::motion::{MotionContext, MotionState, MotionTuning, Release};
use super::sequence::{COPIES, DisplaySequence};

/// Pointer input consumed by the carousel. Positions are horizontal
/// coordinates in any frame of reference that stays fixed during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, at: Instant },
    Move { x: f32, at: Instant },
    Up,
    Leave,
    Cancel,
}

/// Cursor shown over the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Grab,
    Grabbing,
}

/// An endlessly looping, draggable carousel over `items`.
///
/// The carousel does nothing until [`mount`](Self::mount) centres it on the
/// middle copy. After that the host calls [`tick`](Self::tick) once per
/// rendered frame and forwards pointer input; both return the new offset when
/// it changed so the host can push it to its scroll container.
#[derive(Debug, Clone)]
pub struct InfiniteCarousel<T> {
    items: Vec<T>,
    layout: CarouselLayout,
    tuning: MotionTuning,
    total_width: f32,
    motion: MotionContext,
    mounted: bool,
}

impl<T> InfiniteCarousel<T> {
    /// Build a carousel. Empty item lists and invalid layout or tuning are
    /// configuration errors.
    pub fn new(
        items: Vec<T>,
        layout: CarouselLayout,
        tuning: MotionTuning,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        layout.validate()?;
        tuning.validate()?;

        let total_width = layout.total_width(items.len());
        Ok(Self {
            items,
            layout,
            tuning,
            total_width,
            motion: MotionContext::new(total_width),
            mounted: false,
        })
    }

    /// Build with default tuning.
    pub fn with_layout(
        items: Vec<T>,
        layout: CarouselLayout,
    ) -> Result<Self, CarouselError> {
        Self::new(items, layout, MotionTuning::default())
    }

    /// Centre on the middle copy and start auto-scrolling. Returns the
    /// initial offset, which must be applied before the first paint.
    pub fn mount(&mut self) -> f32 {
        self.motion.reset(self.total_width);
        self.mounted = true;
        log::debug!(
            "carousel mounted: {} items, span {:.1}px, speed {:+.2}px/frame",
            self.items.len(),
            self.total_width,
            self.layout.auto_scroll_speed
        );
        self.total_width
    }

    /// Stop all motion. Frames and pointer input are ignored until the next
    /// mount, including input belonging to a drag interrupted by unmount.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.motion.reset(self.motion.offset());
        self.mounted = false;
        log::debug!("carousel unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Advance one animation frame. Returns the new offset if it moved.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.mounted {
            return None;
        }
        let moved = self.motion.advance_frame(
            self.layout.auto_scroll_speed,
            self.total_width,
            &self.tuning,
        );
        (moved != 0.0).then(|| self.motion.offset())
    }

    /// Dispatch a pointer event. Returns the new offset if it moved.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<f32> {
        match event {
            PointerEvent::Down { x, at } => {
                self.pointer_down(x, at);
                None
            }
            PointerEvent::Move { x, at } => self.pointer_move(x, at),
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => {
                let before = self.motion.offset();
                self.pointer_up();
                let after = self.motion.offset();
                (after != before).then_some(after)
            }
        }
    }

    /// Start dragging. Momentum is cancelled before this returns, so a frame
    /// scheduled after the event cannot move the offset.
    pub fn pointer_down(&mut self, x: f32, at: Instant) {
        if !self.mounted || !x.is_finite() {
            return;
        }
        self.motion.begin_drag(x, at);
    }

    /// Follow the pointer while dragging.
    pub fn pointer_move(&mut self, x: f32, at: Instant) -> Option<f32> {
        if !self.mounted || !x.is_finite() {
            return None;
        }
        self.motion.drag_to(x, at, self.drag_limit())
    }

    /// End a drag on pointer-up, leave or cancel. Safe to call at any time;
    /// without a drag in progress it does nothing.
    pub fn pointer_up(&mut self) -> Release {
        if !self.mounted {
            return Release::Ignored;
        }
        let release = self.motion.end_drag(self.total_width, &self.tuning);
        match release {
            Release::Ignored => {}
            Release::AutoScroll => {
                log::debug!("drag released without momentum");
            }
            Release::Momentum(momentum) => {
                log::debug!(
                    "drag released with momentum {momentum:+.2}px/frame"
                );
            }
        }
        release
    }

    /// Replace the layout, e.g. after a breakpoint change. The offset keeps
    /// its relative position within the middle copy.
    pub fn set_layout(
        &mut self,
        layout: CarouselLayout,
    ) -> Result<(), CarouselError> {
        layout.validate()?;
        if layout == self.layout {
            return Ok(());
        }
        let total_width = layout.total_width(self.items.len());
        self.motion.rescale(self.total_width, total_width);
        self.motion.cancel_drag();
        self.layout = layout;
        self.total_width = total_width;
        log::debug!(
            "carousel relaid out: card {:.0}px, spacing {:.0}px, span {:.1}px",
            layout.card_width,
            layout.card_spacing,
            total_width
        );
        Ok(())
    }

    /// Replace the items. The offset keeps its relative position.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyItems);
        }
        let total_width = self.layout.total_width(items.len());
        self.motion.rescale(self.total_width, total_width);
        self.motion.cancel_drag();
        self.items = items;
        self.total_width = total_width;
        Ok(())
    }

    pub fn offset(&self) -> f32 {
        self.motion.offset()
    }

    pub fn state(&self) -> MotionState {
        self.motion.state()
    }

    /// Residual momentum in px/frame.
    pub fn momentum(&self) -> f32 {
        self.motion.momentum()
    }

    pub fn motion(&self) -> &MotionContext {
        &self.motion
    }

    pub fn is_dragging(&self) -> bool {
        self.motion.is_dragging()
    }

    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn display_sequence(&self) -> DisplaySequence<'_, T> {
        DisplaySequence::new(&self.items)
    }

    /// Width of the rendered tripled row.
    pub fn content_width(&self) -> f32 {
        self.layout.content_width(self.items.len())
    }

    /// Display indices to render for a viewport of `viewport_width` px.
    pub fn visible_range(
        &self,
        viewport_width: f32,
        overscan: usize,
    ) -> Range<usize> {
        self.layout.visible_range(
            self.items.len(),
            self.motion.offset(),
            viewport_width,
            overscan,
        )
    }

    pub fn cursor(&self) -> CursorAffordance {
        if self.is_dragging() {
            CursorAffordance::Grabbing
        } else {
            CursorAffordance::Grab
        }
    }

    /// Whether items may react to pointer input. False while dragging so a
    /// pan is never mistaken for a click or a native drag of item content.
    pub fn items_interactive(&self) -> bool {
        !self.is_dragging()
    }

    /// Upper bound for drag offsets: one span short of the tripled row, so at
    /// least one full copy remains to the right of the viewport start.
    fn drag_limit(&self) -> f32 {
        self.total_width * (COPIES - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn carousel(speed: f32) -> InfiniteCarousel<usize> {
        InfiniteCarousel::with_layout(
            (0..5).collect(),
            CarouselLayout::new(200.0, 20.0).with_auto_scroll_speed(speed),
        )
        .unwrap()
    }

    #[test]
    fn empty_items_are_rejected() {
        let result = InfiniteCarousel::<u8>::with_layout(
            vec![],
            CarouselLayout::default(),
        );
        assert_eq!(result.unwrap_err(), CarouselError::EmptyItems);
    }

    #[test]
    fn unmounted_carousel_ignores_frames_and_input() {
        let mut c = carousel(2.0);
        assert_eq!(c.tick(), None);
        c.pointer_down(10.0, Instant::now());
        assert!(!c.is_dragging());
        assert_eq!(c.pointer_up(), Release::Ignored);
    }

    #[test]
    fn mount_centres_on_middle_copy() {
        let mut c = carousel(2.0);
        assert_eq!(c.mount(), 1100.0);
        assert_eq!(c.offset(), 1100.0);
        assert_eq!(c.state(), MotionState::AutoScroll);
        assert_eq!(c.tick(), Some(1102.0));
    }

    #[test]
    fn unmount_during_drag_drops_the_drag() {
        let t0 = Instant::now();
        let mut c = carousel(2.0);
        c.mount();
        c.pointer_down(100.0, t0);
        c.pointer_move(40.0, t0 + Duration::from_millis(16));
        c.unmount();
        assert!(!c.is_dragging());
        assert_eq!(c.tick(), None);
        assert_eq!(
            c.pointer_move(0.0, t0 + Duration::from_millis(32)),
            None
        );
    }

    #[test]
    fn cursor_tracks_drag_state() {
        let mut c = carousel(2.0);
        c.mount();
        assert_eq!(c.cursor(), CursorAffordance::Grab);
        c.handle_pointer(PointerEvent::Down {
            x: 5.0,
            at: Instant::now(),
        });
        assert_eq!(c.cursor(), CursorAffordance::Grabbing);
        assert!(!c.items_interactive());
        c.handle_pointer(PointerEvent::Leave);
        assert_eq!(c.cursor(), CursorAffordance::Grab);
        assert!(c.items_interactive());
    }

    #[test]
    fn duplicate_release_events_are_noops() {
        let mut c = carousel(2.0);
        c.mount();
        assert_eq!(c.handle_pointer(PointerEvent::Up), None);
        assert_eq!(c.handle_pointer(PointerEvent::Cancel), None);
        assert_eq!(c.pointer_up(), Release::Ignored);
        assert_eq!(c.offset(), 1100.0);
    }

    #[test]
    fn set_layout_rescales_offset() {
        let mut c = carousel(2.0);
        c.mount();
        for _ in 0..55 {
            c.tick();
        }
        // 1210 is a tenth of the way into the middle copy
        assert_eq!(c.offset(), 1210.0);

        c.set_layout(CarouselLayout::new(100.0, 10.0)).unwrap();
        assert_eq!(c.total_width(), 550.0);
        assert!((c.offset() - 605.0).abs() < 1e-3);
    }

    #[test]
    fn set_items_rejects_empty_lists() {
        let mut c = carousel(2.0);
        assert_eq!(c.set_items(vec![]), Err(CarouselError::EmptyItems));
        c.set_items(vec![1, 2]).unwrap();
        assert_eq!(c.total_width(), 440.0);
        assert_eq!(c.display_sequence().len(), 6);
    }
}
