use iced::Subscription;

use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subs = vec![iced::window::events().map(|(_id, event)| match event {
        iced::window::Event::Resized(size) => Message::WindowResized(size),
        _ => Message::NoOp,
    })];

    // Dropping the frame subscription is what stops the loop on unmount
    if state.any_mounted() {
        subs.push(iced::window::frames().map(Message::Frame));
    }

    Subscription::batch(subs)
}
