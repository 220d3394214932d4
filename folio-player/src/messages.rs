use std::time::Instant;

use folio_model::Collection;
use iced::{Point, Size};

#[derive(Clone, Debug)]
pub enum Message {
    /// Frame-synchronized tick with timestamp from window::frames()
    Frame(Instant),
    Shelf(Collection, ShelfMessage),
    WindowResized(Size),
    NoOp,
}

/// Pointer input from the `mouse_area` around a shelf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShelfMessage {
    /// Cursor position relative to the shelf's bounds.
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerExited,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "Frame",
            Self::Shelf(_, ShelfMessage::PointerMoved(_)) => {
                "Shelf::PointerMoved"
            }
            Self::Shelf(_, ShelfMessage::PointerPressed) => {
                "Shelf::PointerPressed"
            }
            Self::Shelf(_, ShelfMessage::PointerReleased) => {
                "Shelf::PointerReleased"
            }
            Self::Shelf(_, ShelfMessage::PointerExited) => {
                "Shelf::PointerExited"
            }
            Self::WindowResized(_) => "WindowResized",
            Self::NoOp => "NoOp",
        }
    }
}
