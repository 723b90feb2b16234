use iced::Task;
use iced::widget::{operation::scroll_to, scrollable::AbsoluteOffset};

use super::Message;
use crate::domains::page;
use crate::messages::DomainMessage;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<DomainMessage> {
    log::trace!("{}", message.name());

    match message {
        Message::ToggleMenu => {
            let open = state.domains.nav.toggle();
            log::debug!("nav menu open: {open}");
            Task::none()
        }
        Message::LinkPressed(section) => {
            let header_height = state.config.header.height_px;
            let target = state
                .domains
                .nav
                .follow_link(section.top(), || header_height);

            let viewport_height = state.domains.page.viewport_height();
            let reveal = page::update::apply_scroll(state, target, viewport_height);

            Task::batch([
                scroll_to::<DomainMessage>(
                    state.domains.page.scroll_id.clone(),
                    AbsoluteOffset { x: 0.0, y: target },
                ),
                reveal,
            ])
        }
    }
}
