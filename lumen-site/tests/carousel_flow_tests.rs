use iced::Size;
use lumen_config::SiteConfig;
use lumen_site::app::{AppConfig, bootstrap};
use lumen_site::domains::carousel::Message as CarouselMessage;
use lumen_site::domains::nav::Message as NavMessage;
use lumen_site::domains::page::{Message as PageMessage, Section};
use lumen_site::messages::DomainMessage;
use lumen_site::state::State;
use lumen_site::update::update;

fn boot_at(width: f32) -> State {
    let mut site = SiteConfig::default();
    site.window.width = width;
    bootstrap::base_state(&AppConfig::new(site))
}

fn send(state: &mut State, message: impl Into<DomainMessage>) {
    let _ = update(state, message.into());
}

fn index(state: &State) -> usize {
    state
        .domains
        .carousel
        .controller()
        .expect("carousel should be mounted")
        .current_index()
}

#[test]
fn boot_mounts_carousel_and_reveals_first_screen() {
    let state = boot_at(1280.0);
    let controller = state.domains.carousel.controller().unwrap();

    assert_eq!(controller.visible_count(), 3);
    assert_eq!(controller.total(), 6);
    assert_eq!(state.domains.carousel.frame().active_indicator(), Some(0));
    assert!(state.domains.carousel.autoplay_generation().is_some());

    assert!(state.domains.page.is_visible(Section::Hero));
    assert!(state.domains.page.is_visible(Section::Services));
    assert!(!state.domains.page.is_visible(Section::Contact));
}

#[test]
fn next_button_walks_then_wraps() {
    let mut state = boot_at(1280.0);
    let mut seen = Vec::new();
    for _ in 0..4 {
        send(&mut state, CarouselMessage::Next);
        seen.push(index(&state));
    }
    assert_eq!(seen, vec![1, 2, 3, 0]);
}

#[test]
fn manual_navigation_restarts_autoplay_and_drops_stale_ticks() {
    let mut state = boot_at(1280.0);
    let before = state.domains.carousel.autoplay_generation().unwrap();

    send(&mut state, CarouselMessage::Prev);
    assert_eq!(index(&state), 3);
    let after = state.domains.carousel.autoplay_generation().unwrap();
    assert_ne!(before, after);

    send(&mut state, CarouselMessage::AutoplayTick(before));
    assert_eq!(index(&state), 3);

    send(&mut state, CarouselMessage::AutoplayTick(after));
    assert_eq!(index(&state), 0);
    // Automatic advances keep the same timer
    assert_eq!(state.domains.carousel.autoplay_generation(), Some(after));
}

#[test]
fn hover_suspends_autoplay_and_enables_arrow_keys() {
    let mut state = boot_at(1280.0);

    send(&mut state, CarouselMessage::KeyNext);
    assert_eq!(index(&state), 0, "arrow keys need the pointer on the carousel");

    send(&mut state, CarouselMessage::HoverEnter);
    assert_eq!(state.domains.carousel.autoplay_generation(), None);

    send(&mut state, CarouselMessage::KeyNext);
    send(&mut state, CarouselMessage::KeyNext);
    send(&mut state, CarouselMessage::KeyPrev);
    assert_eq!(index(&state), 1);
    assert_eq!(state.domains.carousel.autoplay_generation(), None);

    send(&mut state, CarouselMessage::HoverExit);
    assert!(state.domains.carousel.autoplay_generation().is_some());
}

#[test]
fn swipe_gesture_moves_one_slide() {
    let mut state = boot_at(500.0);

    send(&mut state, CarouselMessage::PointerMoved(300.0));
    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(250.0));
    send(&mut state, CarouselMessage::PointerMoved(200.0));
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(index(&state), 1);

    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(190.0));
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(index(&state), 1, "10px drag is below the threshold");
}

#[test]
fn leaving_mid_drag_cancels_swipe() {
    let mut state = boot_at(500.0);

    send(&mut state, CarouselMessage::HoverEnter);
    send(&mut state, CarouselMessage::PointerMoved(300.0));
    send(&mut state, CarouselMessage::PointerPressed);
    send(&mut state, CarouselMessage::PointerMoved(100.0));
    send(&mut state, CarouselMessage::HoverExit);
    send(&mut state, CarouselMessage::PointerReleased);
    assert_eq!(index(&state), 0);
}

#[test]
fn out_of_range_indicator_is_ignored() {
    let mut state = boot_at(500.0);
    send(&mut state, CarouselMessage::GoTo(4));
    assert_eq!(index(&state), 4);

    send(&mut state, CarouselMessage::GoTo(99));
    assert_eq!(index(&state), 4);
    assert_eq!(state.domains.carousel.frame().active_indicator(), Some(4));
}

#[test]
fn only_the_settled_resize_reaches_the_carousel() {
    let mut state = boot_at(500.0);
    send(&mut state, CarouselMessage::GoTo(5));

    send(&mut state, DomainMessage::WindowResized(Size::new(900.0, 800.0)));
    send(&mut state, DomainMessage::WindowResized(Size::new(1300.0, 800.0)));
    assert_eq!(state.window_size.width, 1300.0);
    assert!(state.resize.is_pending());
    // Nothing applied until the quiet window passes
    assert_eq!(
        state.domains.carousel.controller().unwrap().visible_count(),
        1
    );

    let stale = state.resize.record(900.0);
    let latest = state.resize.record(1300.0);

    send(&mut state, DomainMessage::ResizeSettled(stale));
    assert_eq!(
        state.domains.carousel.controller().unwrap().visible_count(),
        1
    );

    send(&mut state, DomainMessage::ResizeSettled(latest));
    let controller = state.domains.carousel.controller().unwrap();
    assert_eq!(controller.visible_count(), 3);
    assert_eq!(controller.current_index(), 3, "index clamps to the new max");
    assert!(!state.resize.is_pending());
}

#[test]
fn section_link_scrolls_below_header_and_closes_menu() {
    let mut state = boot_at(500.0);
    send(&mut state, NavMessage::ToggleMenu);
    assert!(state.domains.nav.is_open());

    send(&mut state, NavMessage::LinkPressed(Section::Contact));
    let expected = Section::Contact.top() - state.config.header.height_px;

    assert!(!state.domains.nav.is_open());
    assert_eq!(state.domains.page.scroll_offset(), expected);
    assert!(state.domains.nav.is_header_scrolled());
    assert!(state.domains.page.is_visible(Section::Contact));
}

#[test]
fn growing_past_tablet_width_closes_menu() {
    let mut state = boot_at(500.0);
    send(&mut state, NavMessage::ToggleMenu);

    send(&mut state, DomainMessage::WindowResized(Size::new(700.0, 800.0)));
    assert!(state.domains.nav.is_open());

    send(&mut state, DomainMessage::WindowResized(Size::new(1000.0, 800.0)));
    assert!(!state.domains.nav.is_open());
}

#[test]
fn revealing_testimonials_moves_fresh_track_to_current_position() {
    let mut state = boot_at(1280.0);
    assert!(!state.domains.page.is_visible(Section::Testimonials));

    // Autoplay advances while the track is still off-page
    let generation = state.domains.carousel.autoplay_generation().unwrap();
    send(&mut state, CarouselMessage::AutoplayTick(generation));
    assert_eq!(index(&state), 1);
    let target = state.domains.carousel.frame().offset_px;
    assert!(target > 0.0);

    let task = update(
        &mut state,
        PageMessage::Scrolled {
            offset_y: 1200.0,
            viewport_height: 800.0,
        }
        .into(),
    );
    assert!(state.domains.page.is_visible(Section::Testimonials));
    assert!(task.units() > 0, "reveal should scroll the new track");
    assert_eq!(state.domains.carousel.displayed_offset(), target);
    assert!(!state.domains.carousel.is_animating());

    // Later scrolls reveal nothing new and leave the track alone
    let task = update(
        &mut state,
        PageMessage::Scrolled {
            offset_y: 1300.0,
            viewport_height: 800.0,
        }
        .into(),
    );
    assert_eq!(task.units(), 0);
}
