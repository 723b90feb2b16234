use iced::widget::{
    Space, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Alignment, Element, Length};

use super::{CarouselUi, Message};
use crate::content::{TESTIMONIALS, Testimonial};
use crate::layout;
use crate::messages::DomainMessage;
use crate::theme::{self, LumenTheme};

const BUTTON_SIZE: f32 = 44.0;
const DOT_SIZE: f32 = 12.0;

pub fn view(carousel: &CarouselUi) -> Element<'_, DomainMessage> {
    let metrics = carousel.metrics();
    let slide_width = if carousel.is_enabled() {
        metrics.slide_width
    } else {
        carousel.track_width()
    };

    let cards = TESTIMONIALS
        .iter()
        .map(|testimonial| testimonial_card(testimonial, slide_width));
    let track = scrollable(
        row(cards)
            .spacing(metrics.gap)
            .height(Length::Fixed(layout::CAROUSEL_TRACK_HEIGHT)),
    )
    .id(carousel.scroll_id.clone())
    .on_scroll(|viewport| {
        Message::TrackScrolled(viewport.absolute_offset().x).into()
    })
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    ))
    .width(Length::Fixed(carousel.track_width()));

    // A disabled carousel still shows its first card, just without controls
    if !carousel.is_enabled() {
        return container(track).center_x(Length::Fill).into();
    }

    let track = mouse_area(track)
        .on_enter(Message::HoverEnter.into())
        .on_exit(Message::HoverExit.into())
        .on_press(Message::PointerPressed.into())
        .on_release(Message::PointerReleased.into())
        .on_move(|point| Message::PointerMoved(point.x).into());

    let controls = row![
        nav_button("‹", Message::Prev),
        track,
        nav_button("›", Message::Next),
    ]
    .spacing((layout::CAROUSEL_BUTTON_GUTTER - BUTTON_SIZE).max(0.0))
    .align_y(Alignment::Center);

    let dots = row(carousel.frame().indicators.iter().enumerate().map(
        |(index, active)| {
            button(Space::new())
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE))
                .padding(0)
                .style(theme::indicator_style(*active))
                .on_press(Message::GoTo(index).into())
                .into()
        },
    ))
    .spacing(10);

    column![
        container(controls).center_x(Length::Fill),
        container(dots).center_x(Length::Fill),
    ]
    .spacing(24)
    .into()
}

fn nav_button(label: &str, message: Message) -> Element<'_, DomainMessage> {
    button(
        container(text(label).size(24).color(LumenTheme::ACCENT_DARK))
            .center(Length::Fill),
    )
    .width(Length::Fixed(BUTTON_SIZE))
    .height(Length::Fixed(BUTTON_SIZE))
    .padding(0)
    .style(theme::round_button)
    .on_press(message.into())
    .into()
}

fn testimonial_card(
    testimonial: &'static Testimonial,
    width: f32,
) -> Element<'static, DomainMessage> {
    container(
        column![
            text(format!("\u{201c}{}\u{201d}", testimonial.quote))
                .size(16)
                .color(LumenTheme::TEXT_PRIMARY),
            Space::new().height(Length::Fill),
            text(testimonial.author)
                .size(15)
                .color(LumenTheme::ACCENT_DARK),
            text(testimonial.treatment)
                .size(13)
                .color(LumenTheme::TEXT_SECONDARY),
        ]
        .spacing(6),
    )
    .padding(24)
    .width(Length::Fixed(width))
    .height(Length::Fill)
    .style(theme::card_style)
    .into()
}
