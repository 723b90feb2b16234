use iced::widget::{
    Column, Space, button, column, container, row, scrollable, text,
};
use iced::{Alignment, Element, Length, Padding};
use lumen_core::carousel::visible_count;

use super::{Message, Section};
use crate::content;
use crate::domains::{carousel, contact, nav};
use crate::layout;
use crate::messages::DomainMessage;
use crate::state::State;
use crate::theme::{self, LumenTheme};

/// The scrolling page body. The header is layered on top by the root view.
pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let sections = Section::ALL.into_iter().enumerate().map(|(i, section)| {
        let body = if state.domains.page.is_visible(section) {
            section_body(state, section)
        } else {
            Space::new().into()
        };
        container(
            container(body)
                .max_width(layout::MAX_CONTENT_WIDTH)
                .width(Length::Fill),
        )
        .padding(Padding::from([0.0, layout::PAGE_PADDING]))
        .center_x(Length::Fill)
        .height(Length::Fixed(section.height()))
        .style(theme::section_style(i % 2 == 1))
        .into()
    });

    scrollable(Column::with_children(sections).width(Length::Fill))
        .id(state.domains.page.scroll_id.clone())
        .on_scroll(|viewport| {
            Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            }
            .into()
        })
        .height(Length::Fill)
        .into()
}

fn section_body(state: &State, section: Section) -> Element<'_, DomainMessage> {
    match section {
        Section::Hero => hero(state),
        Section::Services => services(state),
        Section::About => about(),
        Section::Testimonials => titled(
            "What our clients say",
            carousel::view::view(&state.domains.carousel),
        ),
        Section::Contact => titled(
            "Book a consultation",
            row![
                contact_details(),
                container(contact::view::view(&state.domains.contact))
                    .width(Length::FillPortion(2)),
            ]
            .spacing(32)
            .into(),
        ),
        Section::Footer => footer(),
    }
}

fn titled<'a>(
    title: &'a str,
    body: Element<'a, DomainMessage>,
) -> Element<'a, DomainMessage> {
    column![
        text(title).size(32).color(LumenTheme::TEXT_PRIMARY),
        body,
    ]
    .spacing(32)
    .padding(Padding::from([56.0, 0.0]))
    .align_x(Alignment::Center)
    .into()
}

fn hero(state: &State) -> Element<'_, DomainMessage> {
    let header_height = state.config.header.height_px;
    container(
        column![
            text(content::TAGLINE).size(44).color(LumenTheme::TEXT_PRIMARY),
            text(content::HERO_BLURB)
                .size(18)
                .color(LumenTheme::TEXT_SECONDARY),
            button(text("Book a consultation").size(16))
                .padding([14, 32])
                .style(theme::primary_button)
                .on_press(nav::Message::LinkPressed(Section::Contact).into()),
        ]
        .spacing(24)
        .max_width(640.0),
    )
    .padding(Padding {
        top: header_height,
        ..Padding::ZERO
    })
    .center_y(Length::Fill)
    .into()
}

fn services(state: &State) -> Element<'_, DomainMessage> {
    // Same responsive columns as the carousel
    let per_row = visible_count(
        state.window_size.width,
        &state.config.carousel.breakpoints,
    );

    let grid = content::SERVICES.chunks(per_row).map(|chunk| {
        row(chunk.iter().map(|service| {
            container(
                column![
                    text(service.name).size(20).color(LumenTheme::TEXT_PRIMARY),
                    text(service.summary)
                        .size(15)
                        .color(LumenTheme::TEXT_SECONDARY),
                    text(service.from_price)
                        .size(15)
                        .color(LumenTheme::ACCENT_DARK),
                ]
                .spacing(10),
            )
            .padding(24)
            .width(Length::Fill)
            .style(theme::card_style)
            .into()
        }))
        .spacing(24)
        .into()
    });

    titled("Our treatments", Column::with_children(grid).spacing(24).into())
}

fn about() -> Element<'static, DomainMessage> {
    titled(
        content::ABOUT_TITLE,
        text(content::ABOUT_BODY)
            .size(17)
            .color(LumenTheme::TEXT_SECONDARY)
            .into(),
    )
}

fn contact_details() -> Element<'static, DomainMessage> {
    column![
        text("Visit us").size(20).color(LumenTheme::TEXT_PRIMARY),
        text(content::CONTACT_ADDRESS).color(LumenTheme::TEXT_SECONDARY),
        text(content::OPENING_HOURS).color(LumenTheme::TEXT_SECONDARY),
        text(content::CONTACT_PHONE).color(LumenTheme::ACCENT_DARK),
        text(content::CONTACT_EMAIL).color(LumenTheme::ACCENT_DARK),
    ]
    .spacing(10)
    .width(Length::FillPortion(1))
    .into()
}

fn footer() -> Element<'static, DomainMessage> {
    container(
        text(format!("© {} · {}", content::BRAND, content::TAGLINE))
            .size(14)
            .color(LumenTheme::TEXT_SECONDARY),
    )
    .center(Length::Fill)
    .into()
}
