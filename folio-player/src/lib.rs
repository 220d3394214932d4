//! Desktop showcase for Folio content.
//!
//! Each home page collection is rendered as a shelf: an endlessly looping
//! carousel that auto-scrolls, can be dragged, and coasts back to its
//! baseline speed after a fling.

pub mod app;
pub mod messages;
pub mod shelf;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;

pub use messages::{Message, ShelfMessage};
pub use state::State;
