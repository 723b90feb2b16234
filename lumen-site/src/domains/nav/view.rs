use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use super::Message;
use crate::content;
use crate::domains::page::Section;
use crate::layout;
use crate::messages::DomainMessage;
use crate::state::State;
use crate::theme::{self, LumenTheme};

/// Fixed header drawn over the page, plus the dropdown menu when open.
pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let nav = &state.domains.nav;
    let header_height = state.config.header.height_px;
    let compact = nav.is_compact(state.window_size.width);

    let brand = text(content::BRAND)
        .size(22)
        .color(LumenTheme::ACCENT_DARK);

    let trailing: Element<'_, DomainMessage> = if compact {
        button(text(if nav.is_open() { "✕" } else { "☰" }).size(20))
            .style(theme::ghost_button)
            .on_press(Message::ToggleMenu.into())
            .into()
    } else {
        row(Section::LINKED.into_iter().map(link))
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
    };

    let bar = container(
        container(
            row![brand, Space::new().width(Length::Fill), trailing]
                .align_y(Alignment::Center),
        )
        .max_width(layout::MAX_CONTENT_WIDTH),
    )
    .padding(Padding::from([0.0, layout::PAGE_PADDING]))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(header_height))
    .style(theme::header_style(nav.is_header_scrolled()));

    if compact && nav.is_open() {
        let menu = Column::with_children(Section::LINKED.into_iter().map(link))
            .spacing(4)
            .padding(16)
            .width(Length::Fill);
        column![bar, container(menu).style(theme::card_style)].into()
    } else {
        bar.into()
    }
}

fn link(section: Section) -> Element<'static, DomainMessage> {
    button(text(section.title()).size(15))
        .style(theme::ghost_button)
        .on_press(Message::LinkPressed(section).into())
        .into()
}
