//! Core of the Folio showcase.
//!
//! [`carousel`] holds the infinite momentum carousel engine: a single motion
//! context per instance, stepped once per animation frame and driven by
//! pointer input. [`content`] loads the ordered record collections the
//! showcase shelves are built from.

pub mod carousel;
pub mod content;

pub use carousel::{
    Breakpoint, CarouselError, CarouselHeight, CarouselLayout,
    CursorAffordance, InfiniteCarousel, MotionState, MotionTuning,
    PointerEvent, Release, ResponsiveLayout,
};
pub use content::{ContentError, ContentLoader};
