use std::time::Instant;

use folio_core::carousel::Breakpoint;
use folio_model::Collection;
use iced::{Size, Task};

use crate::messages::{Message, ShelfMessage};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Frame(_) => frame(state),
        Message::Shelf(collection, shelf_message) => {
            pointer(state, collection, shelf_message, Instant::now())
        }
        Message::WindowResized(size) => resized(state, size),
        Message::NoOp => Task::none(),
    }
}

/// Step every shelf by one frame and push moved offsets to the scrollables.
fn frame(state: &mut State) -> Task<Message> {
    let tasks: Vec<_> = state
        .shelves
        .iter_mut()
        .filter_map(|shelf| {
            shelf.tick().map(|offset| shelf.scroll_to(offset))
        })
        .collect();
    Task::batch(tasks)
}

pub fn pointer(
    state: &mut State,
    collection: Collection,
    message: ShelfMessage,
    at: Instant,
) -> Task<Message> {
    let Some(shelf) = state.shelf_mut(collection) else {
        return Task::none();
    };
    match shelf.pointer(message, at) {
        Some(offset) => shelf.scroll_to(offset),
        None => Task::none(),
    }
}

/// A zero-sized window is minimized: stop animating until it comes back.
fn resized(state: &mut State, size: Size) -> Task<Message> {
    if size.width <= 0.0 || size.height <= 0.0 {
        if state.any_mounted() {
            log::debug!("window hidden, pausing shelves");
            state.unmount_all();
        }
        return Task::none();
    }

    state.viewport_width = size.width;
    let mut tasks = Vec::new();

    let breakpoint = Breakpoint::for_viewport_width(size.width);
    if breakpoint != state.breakpoint {
        log::debug!("breakpoint {:?} -> {:?}", state.breakpoint, breakpoint);
        state.breakpoint = breakpoint;
        for shelf in &mut state.shelves {
            match shelf.apply_breakpoint(breakpoint) {
                Ok(Some(offset)) => tasks.push(shelf.scroll_to(offset)),
                Ok(None) => {}
                Err(err) => log::warn!(
                    "{} shelf kept its layout: {err}",
                    shelf.collection
                ),
            }
        }
    }

    if !state.any_mounted() {
        tasks.push(state.mount_all());
    }
    Task::batch(tasks)
}
