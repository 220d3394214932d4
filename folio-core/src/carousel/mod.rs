//! Infinite momentum carousel
//!
//! The engine keeps the visible window inside the middle copy of a tripled
//! item list. Each frame it either auto-scrolls at a constant signed speed,
//! decays residual drag momentum back into that speed, or does nothing while
//! the pointer owns the offset.

pub mod engine;
pub mod error;
pub mod layout;
pub mod motion;
pub mod sequence;
pub mod velocity;
pub mod wrap;

pub use engine::{CursorAffordance, InfiniteCarousel, PointerEvent};
pub use error::CarouselError;
pub use layout::{Breakpoint, CarouselHeight, CarouselLayout, ResponsiveLayout};
pub use motion::{MotionContext, MotionState, MotionTuning, Release};
pub use sequence::{DisplaySequence, DisplaySlot};
pub use velocity::VelocityTracker;
pub use wrap::wrap_correct;
