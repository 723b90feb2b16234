//! Carousel behaviour across slide counts and viewport widths
//!
//! These walk every reachable state for small carousels rather than
//! sampling, since the state space is tiny.

use lumen_core::carousel::{
    Breakpoints, CarouselMarkup, CarouselSettings, CarouselState, SlideMetrics,
    visible_count,
};
use lumen_core::debounce::Debouncer;

const WIDTHS: [f32; 3] = [500.0, 800.0, 1200.0];

fn settings() -> CarouselSettings {
    CarouselSettings {
        autoplay: false,
        ..CarouselSettings::default()
    }
}

fn mount(slides: usize, width: f32) -> CarouselState {
    CarouselState::mount(&CarouselMarkup::complete(slides), width, settings())
        .expect("complete markup mounts")
}

#[test]
fn next_cycles_back_to_start_after_every_position() {
    for width in WIDTHS {
        for slides in 1..=8 {
            let mut state = mount(slides, width);
            let visible = state.visible_count();
            if slides < visible {
                continue;
            }
            for _ in 0..(slides - visible) + 1 {
                state.next();
            }
            assert_eq!(
                state.current_index(),
                0,
                "slides={slides} width={width}"
            );
        }
    }
}

#[test]
fn prev_from_start_lands_on_last_position() {
    for width in WIDTHS {
        for slides in 3..=8 {
            let mut state = mount(slides, width);
            state.prev();
            assert_eq!(state.current_index(), slides - state.visible_count());
        }
    }
}

#[test]
fn exactly_one_indicator_tracks_the_index() {
    let metrics = SlideMetrics {
        slide_width: 300.0,
        gap: 30.0,
    };
    for width in WIDTHS {
        for slides in 1..=7 {
            let mut state = mount(slides, width);
            for step in 0..slides * 2 {
                let frame = state.render(metrics);
                let active: Vec<_> = frame
                    .indicators
                    .iter()
                    .enumerate()
                    .filter(|(_, on)| **on)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(
                    active,
                    vec![state.current_index()],
                    "slides={slides} width={width} step={step}"
                );
                assert!(state.current_index() <= state.max_index());
                if step % 3 == 0 {
                    state.prev();
                } else {
                    state.next();
                }
            }
        }
    }
}

#[test]
fn visible_count_is_a_step_function_of_width() {
    let bp = Breakpoints::default();
    let counts: Vec<_> = (0..=2000)
        .step_by(10)
        .map(|w| visible_count(w as f32, &bp))
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(visible_count(500.0, &bp), 1);
    assert_eq!(visible_count(800.0, &bp), 2);
    assert_eq!(visible_count(1200.0, &bp), 3);
}

#[test]
fn resize_burst_applies_only_the_final_width() {
    let mut state = mount(6, 500.0);
    state.go_to(4).unwrap();

    let mut debouncer = Debouncer::new(settings().resize_debounce());
    let tickets: Vec<_> = [700.0, 900.0, 1300.0]
        .into_iter()
        .map(|w| debouncer.record(w))
        .collect();

    for ticket in tickets {
        if let Some(width) = debouncer.settle(ticket) {
            state.on_resize(width);
        }
    }

    assert_eq!(state.visible_count(), 3);
    assert_eq!(state.current_index(), 3);
}

#[test]
fn swipe_scenarios_from_reference_behaviour() {
    let mut state = mount(6, 1200.0);
    state.handle_swipe(300.0, 200.0);
    assert_eq!(state.current_index(), 1);
    state.handle_swipe(300.0, 290.0);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn autoplay_ticks_advance_only_for_live_generation() {
    let mut state = CarouselState::mount(
        &CarouselMarkup::complete(6),
        1200.0,
        CarouselSettings::default(),
    )
    .unwrap();
    let generation = state.autoplay().live_generation().unwrap();

    state.autoplay_mut().suspend();
    if state.autoplay().accept_tick(generation) {
        state.next();
    }
    assert_eq!(state.current_index(), 0);

    state.autoplay_mut().resume();
    let live = state.autoplay().live_generation().unwrap();
    if state.autoplay().accept_tick(live) {
        state.next();
    }
    assert_eq!(state.current_index(), 1);
}
