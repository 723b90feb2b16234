//! Root update: routes domain messages and owns the resize debounce

use iced::Task;

use crate::domains::{carousel, contact, nav, page};
use crate::messages::DomainMessage;
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    match message {
        DomainMessage::Carousel(msg) => {
            carousel::update::update(&mut state.domains.carousel, msg)
        }
        DomainMessage::Nav(msg) => nav::update::update(state, msg),
        DomainMessage::Page(msg) => page::update::update(state, msg),
        DomainMessage::Contact(msg) => {
            contact::update::update(&mut state.domains.contact, msg)
        }
        DomainMessage::WindowResized(size) => {
            state.window_size = size;
            state.domains.nav.on_resize(size.width);
            let offset = state.domains.page.scroll_offset();
            let reveal = page::update::apply_scroll(state, offset, size.height);

            // The carousel only sees the last width of a burst
            let ticket = state.resize.record(size.width);
            let window = state.resize.window();
            Task::batch([
                reveal,
                Task::perform(
                    async move { tokio::time::sleep(window).await },
                    move |()| DomainMessage::ResizeSettled(ticket),
                ),
            ])
        }
        DomainMessage::ResizeSettled(ticket) => {
            match state.resize.settle(ticket) {
                Some(width) => {
                    log::debug!("window resize settled at {width}px");
                    state.domains.carousel.on_resize(width)
                }
                None => Task::none(),
            }
        }
        DomainMessage::NoOp => Task::none(),
    }
}
