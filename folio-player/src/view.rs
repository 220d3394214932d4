use folio_core::CursorAffordance;
use folio_core::carousel::sequence::COPIES;
use iced::{
    Alignment, Element, Length, mouse,
    widget::{Space, column, container, mouse_area, row, scrollable, text},
};

use crate::messages::{Message, ShelfMessage};
use crate::shelf::Shelf;
use crate::state::State;
use crate::theme::{self, ShowcaseTheme};
use crate::widgets;

/// Horizontal page padding on each side of a shelf.
pub const H_PADDING: f32 = 32.0;
/// Extra frames rendered beyond each viewport edge.
pub const OVERSCAN: usize = 1;

pub fn view(state: &State) -> Element<'_, Message> {
    let mut page = column![].spacing(40).padding([40, 0]);

    if let Some(error) = &state.load_error {
        page = page.push(
            container(
                text(format!("Some content could not be loaded: {error}"))
                    .size(14)
                    .color(ShowcaseTheme::ERROR),
            )
            .padding([0, H_PADDING as u16]),
        );
    }

    for shelf in &state.shelves {
        page = page.push(shelf_view(state, shelf));
    }

    scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Width the shelf's scrollable occupies for the current window.
pub fn shelf_viewport_width(window_width: f32) -> f32 {
    (window_width - 2.0 * H_PADDING).max(0.0)
}

fn shelf_view<'a>(state: &'a State, shelf: &'a Shelf) -> Element<'a, Message> {
    let header = container(
        text(shelf.title.as_str())
            .size(28)
            .color(ShowcaseTheme::TEXT_PRIMARY),
    )
    .padding([0, H_PADDING as u16]);

    let height = shelf.height(state.breakpoint);
    let body: Element<'a, Message> = match shelf.carousel() {
        None => container(
            text("Nothing here yet")
                .size(16)
                .color(ShowcaseTheme::TEXT_DIMMED),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(theme::placeholder)
        .into(),
        Some(_) => track(state, shelf, height),
    };

    column![
        header,
        container(body).padding([0, H_PADDING as u16]),
    ]
    .spacing(16)
    .width(Length::Fill)
    .into()
}

/// The windowed, tripled item row inside a pointer-tracking scrollable.
fn track<'a>(
    state: &'a State,
    shelf: &'a Shelf,
    height: f32,
) -> Element<'a, Message> {
    let Some(carousel) = shelf.carousel() else {
        return Space::new().into();
    };
    let layout = *carousel.layout();
    let stride = layout.stride();
    let slots = carousel.len() * COPIES;
    let viewport = shelf_viewport_width(state.viewport_width);
    let range = carousel.visible_range(viewport, OVERSCAN);
    let interactive = carousel.items_interactive();

    let mut item_row = row![].spacing(0).align_y(Alignment::Start);

    // Left spacer for frames before the visible range
    if range.start > 0 {
        let spacer_w = range.start as f32 * stride;
        item_row = item_row.push(Space::new().width(Length::Fixed(spacer_w)));
    }

    for slot in carousel.display_sequence().slots(range.clone()) {
        item_row = item_row.push(widgets::shelf_item(
            slot,
            &layout,
            height,
            interactive,
        ));
        if slot.display_index + 1 < slots {
            item_row = item_row
                .push(Space::new().width(Length::Fixed(layout.card_spacing)));
        }
    }

    // Right spacer keeps the row at the full tripled width
    if range.end < slots {
        let spacer_w =
            (slots - range.end) as f32 * stride - layout.card_spacing;
        item_row = item_row.push(Space::new().width(Length::Fixed(spacer_w)));
    }
    // One viewport of slack so offsets near the end of a drag never clamp
    item_row = item_row.push(Space::new().width(Length::Fixed(viewport)));

    let scroll = scrollable(item_row)
        .id(shelf.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(height));

    let collection = shelf.collection;
    let interaction = match carousel.cursor() {
        CursorAffordance::Grab => mouse::Interaction::Grab,
        CursorAffordance::Grabbing => mouse::Interaction::Grabbing,
    };

    mouse_area(scroll)
        .on_press(Message::Shelf(collection, ShelfMessage::PointerPressed))
        .on_release(Message::Shelf(collection, ShelfMessage::PointerReleased))
        .on_move(move |point| {
            Message::Shelf(collection, ShelfMessage::PointerMoved(point))
        })
        .on_exit(Message::Shelf(collection, ShelfMessage::PointerExited))
        .interaction(interaction)
        .into()
}
