use iced::Element;
use iced::widget::stack;

use crate::domains::{nav, page};
use crate::messages::DomainMessage;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    stack![page::view::view(state), nav::view::view(state)].into()
}
