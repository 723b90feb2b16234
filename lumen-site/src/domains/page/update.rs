use iced::Task;

use super::{Message, Section};
use crate::messages::DomainMessage;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<DomainMessage> {
    match message {
        Message::Scrolled {
            offset_y,
            viewport_height,
        } => apply_scroll(state, offset_y, viewport_height),
    }
}

/// Feed a page scroll position to the header and the reveal tracker.
///
/// The carousel track only enters the widget tree once its section is
/// revealed, so autoplay may already have moved past the first slide. The
/// returned task puts the new track at the current position.
pub fn apply_scroll(
    state: &mut State,
    offset_y: f32,
    viewport_height: f32,
) -> Task<DomainMessage> {
    if state.domains.nav.on_scroll(offset_y) {
        log::trace!(
            "header scrolled: {}",
            state.domains.nav.is_header_scrolled()
        );
    }

    let revealed = state.domains.page.on_scroll(offset_y, viewport_height);
    if revealed.contains(&Section::Testimonials) {
        state.domains.carousel.snap()
    } else {
        Task::none()
    }
}
