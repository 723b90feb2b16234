use iced::Task;

use super::{CarouselUi, Message};
use crate::messages::DomainMessage;

pub fn update(carousel: &mut CarouselUi, message: Message) -> Task<DomainMessage> {
    log::trace!("{}", message.name());

    match message {
        Message::AnimationFrame => return carousel.animation_frame(),
        Message::TrackScrolled(x) => return carousel.track_scrolled(x),
        _ => {}
    }

    let CarouselUi {
        controller: Some(controller),
        swipe,
        ..
    } = &mut *carousel
    else {
        return Task::none();
    };

    let moved = match message {
        Message::Next => {
            controller.next();
            true
        }
        Message::Prev => {
            controller.prev();
            true
        }
        Message::GoTo(index) => match controller.go_to(index) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("ignoring indicator press: {err}");
                false
            }
        },
        Message::KeyNext if controller.autoplay().is_hovered() => {
            controller.next();
            true
        }
        Message::KeyPrev if controller.autoplay().is_hovered() => {
            controller.prev();
            true
        }
        Message::KeyNext | Message::KeyPrev => false,
        Message::AutoplayTick(generation) => {
            if controller.autoplay().accept_tick(generation) {
                controller.next();
                // An automatic advance must not restart the interval
                carousel.repaint();
            } else {
                log::trace!("dropping stale autoplay tick {generation}");
            }
            return Task::none();
        }
        Message::HoverEnter => {
            controller.autoplay_mut().suspend();
            false
        }
        Message::HoverExit => {
            controller.autoplay_mut().resume();
            swipe.cancel();
            false
        }
        Message::PointerMoved(x) => {
            swipe.moved(x);
            false
        }
        Message::PointerPressed => {
            swipe.press(None);
            false
        }
        Message::PointerReleased => match swipe.release(None) {
            Some((start_x, end_x)) => {
                controller.handle_swipe(start_x, end_x).is_some()
            }
            None => false,
        },
        Message::AnimationFrame | Message::TrackScrolled(_) => false,
    };

    if moved {
        controller.autoplay_mut().restart();
        carousel.repaint();
    }

    Task::none()
}
