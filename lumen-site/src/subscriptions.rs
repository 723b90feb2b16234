//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};

use crate::domains::carousel::Message as CarouselMessage;
use crate::layout::ANIMATION_TICK_NS;
use crate::messages::DomainMessage;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![
        iced::window::resize_events()
            .map(|(_, size)| DomainMessage::WindowResized(size)),
        event::listen_with(carousel_key_handler),
    ];

    let carousel = &state.domains.carousel;

    // Keyed on the generation: a restart swaps the timer instead of
    // stacking a second one
    if let (Some(generation), Some(interval)) =
        (carousel.autoplay_generation(), carousel.autoplay_interval())
    {
        subscriptions.push(iced::time::every(interval).with(generation).map(
            |(generation, _)| {
                DomainMessage::Carousel(CarouselMessage::AutoplayTick(
                    generation,
                ))
            },
        ));
    }

    if carousel.is_animating() {
        subscriptions.push(
            iced::time::every(Duration::from_nanos(ANIMATION_TICK_NS)) // ~60 FPS
                .map(|_| DomainMessage::Carousel(CarouselMessage::AnimationFrame)),
        );
    }

    Subscription::batch(subscriptions)
}

fn carousel_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: iced::window::Id,
) -> Option<DomainMessage> {
    // Arrow keys inside a text field belong to the field
    if matches!(status, EventStatus::Captured) {
        return None;
    }

    if let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed {
        key, modifiers, ..
    }) = event
    {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }

        match key {
            Key::Named(Named::ArrowLeft) => {
                Some(DomainMessage::Carousel(CarouselMessage::KeyPrev))
            }
            Key::Named(Named::ArrowRight) => {
                Some(DomainMessage::Carousel(CarouselMessage::KeyNext))
            }
            _ => None,
        }
    } else {
        None
    }
}
