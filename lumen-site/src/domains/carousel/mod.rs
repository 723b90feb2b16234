//! Testimonial carousel adapter
//!
//! Owns the mounted [`CarouselState`] and everything iced needs to show
//! it: the track's scrollable id, the tween toward the current resting
//! offset and the pointer drag in progress.

pub mod animator;
pub mod messages;
pub mod update;
pub mod view;

use std::time::Duration;

use iced::Task;
use iced::widget::{self, operation::scroll_to, scrollable::AbsoluteOffset};
use lumen_core::carousel::{
    CarouselMarkup, CarouselSettings, CarouselState, Frame, Generation,
    SlideMetrics, SwipeTracker,
};

use crate::layout;
use crate::messages::DomainMessage;

pub use animator::SlideAnimator;
pub use messages::Message;

/// Sub-pixel differences come from the scrollable rounding its offset.
const TRACK_DRIFT_TOLERANCE_PX: f32 = 0.5;

#[derive(Debug)]
pub struct CarouselUi {
    controller: Option<CarouselState>,
    pub swipe: SwipeTracker,
    pub animator: SlideAnimator,
    pub scroll_id: widget::Id,
    track_width: f32,
    displayed_offset: f32,
    frame: Frame,
}

impl CarouselUi {
    /// Mount over `markup`. A mount failure leaves the carousel disabled for
    /// the rest of the session; every message is then ignored.
    pub fn mount(
        markup: &CarouselMarkup,
        window_width: f32,
        settings: CarouselSettings,
    ) -> Self {
        let controller =
            match CarouselState::mount(markup, window_width, settings) {
                Ok(state) => Some(state),
                Err(err) => {
                    log::warn!("testimonial carousel disabled: {err}");
                    None
                }
            };

        let mut carousel = Self {
            controller,
            swipe: SwipeTracker::new(),
            animator: SlideAnimator::new(),
            scroll_id: widget::Id::unique(),
            track_width: layout::carousel_track_width(window_width),
            displayed_offset: 0.0,
            frame: Frame::default(),
        };
        if let Some(controller) = &carousel.controller {
            carousel.frame = controller.render(carousel.metrics());
            carousel.displayed_offset = carousel.frame.offset_px;
        }
        carousel
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<&CarouselState> {
        self.controller.as_ref()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    /// Offset currently applied to the track, which trails the frame while a
    /// transition is running.
    pub fn displayed_offset(&self) -> f32 {
        self.displayed_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Generation of the live autoplay timer. `None` while autoplay is off,
    /// suspended, or the carousel is disabled.
    pub fn autoplay_generation(&self) -> Option<Generation> {
        self.controller
            .as_ref()
            .and_then(|c| c.autoplay().live_generation())
    }

    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.controller
            .as_ref()
            .map(|c| c.settings().autoplay_interval())
    }

    /// Measured geometry for the current track width.
    pub fn metrics(&self) -> SlideMetrics {
        match &self.controller {
            Some(controller) => SlideMetrics::fill(
                self.track_width,
                controller.visible_count(),
                controller.settings().slide_gap_px,
            ),
            None => SlideMetrics::default(),
        }
    }

    /// Re-render after a transition and tween the track to the new offset.
    pub fn repaint(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        self.frame = controller.render(self.metrics());
        self.animator.start(
            self.displayed_offset,
            self.frame.offset_px,
            Duration::from_millis(layout::SLIDE_TRANSITION_MS),
        );
    }

    /// Re-render and jump straight to the new offset.
    pub fn snap(&mut self) -> Task<DomainMessage> {
        let Some(controller) = &self.controller else {
            return Task::none();
        };
        self.frame = controller.render(self.metrics());
        self.animator.cancel();
        self.displayed_offset = self.frame.offset_px;
        self.scroll_track()
    }

    /// Advance the running transition by one frame.
    pub fn animation_frame(&mut self) -> Task<DomainMessage> {
        match self.animator.tick() {
            Some(offset) => {
                self.displayed_offset = offset;
                self.scroll_track()
            }
            None => Task::none(),
        }
    }

    /// The track reported its scroll offset. Anything other than our own
    /// tween or snap (a wheel or trackpad gesture) is pulled back to the
    /// resting offset of the current position.
    pub fn track_scrolled(&mut self, x: f32) -> Task<DomainMessage> {
        if self.controller.is_none()
            || self.animator.is_active()
            || (x - self.displayed_offset).abs() <= TRACK_DRIFT_TOLERANCE_PX
        {
            return Task::none();
        }
        log::trace!(
            "track drifted to {x}px, snapping back to {}px",
            self.frame.offset_px
        );
        self.snap()
    }

    /// Apply a settled window width.
    pub fn on_resize(&mut self, window_width: f32) -> Task<DomainMessage> {
        self.track_width = layout::carousel_track_width(window_width);
        let Some(controller) = &mut self.controller else {
            return Task::none();
        };
        if controller.on_resize(window_width) {
            log::debug!(
                "carousel now shows {} slides",
                controller.visible_count()
            );
        }
        // Slide widths changed, so any running tween is aiming at a stale
        // offset
        self.snap()
    }

    fn scroll_track(&self) -> Task<DomainMessage> {
        scroll_to::<DomainMessage>(
            self.scroll_id.clone(),
            AbsoluteOffset {
                x: self.displayed_offset,
                y: 0.0,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CarouselSettings {
        CarouselSettings {
            autoplay: false,
            ..CarouselSettings::default()
        }
    }

    #[test]
    fn missing_track_disables_carousel() {
        let markup = CarouselMarkup {
            has_track: false,
            ..CarouselMarkup::complete(6)
        };
        let carousel = CarouselUi::mount(&markup, 1280.0, settings());
        assert!(!carousel.is_enabled());
        assert!(carousel.frame().indicators.is_empty());
        assert_eq!(carousel.autoplay_generation(), None);
    }

    #[test]
    fn mounted_carousel_renders_first_position() {
        let carousel =
            CarouselUi::mount(&CarouselMarkup::complete(6), 1280.0, settings());
        assert!(carousel.is_enabled());
        assert_eq!(carousel.frame().active_indicator(), Some(0));
        assert_eq!(carousel.displayed_offset(), 0.0);
    }

    #[test]
    fn wheel_scroll_on_track_snaps_back() {
        let mut carousel =
            CarouselUi::mount(&CarouselMarkup::complete(6), 500.0, settings());
        let _ = update::update(&mut carousel, Message::GoTo(2));
        // Let the tween finish as if every frame had been delivered
        carousel.animator.cancel();
        let _ = carousel.snap();
        let resting = carousel.frame().offset_px;
        assert!(resting > 0.0);

        // Our own scroll_to echoing back is not drift
        assert_eq!(carousel.track_scrolled(resting + 0.2).units(), 0);

        let task = carousel.track_scrolled(resting + 140.0);
        assert!(task.units() > 0);
        assert_eq!(carousel.displayed_offset(), resting);
        assert_eq!(carousel.frame().active_indicator(), Some(2));
    }

    #[test]
    fn track_scroll_during_tween_is_left_to_the_animation() {
        let mut carousel =
            CarouselUi::mount(&CarouselMarkup::complete(6), 500.0, settings());
        let _ = update::update(&mut carousel, Message::Next);
        assert!(carousel.is_animating());
        assert_eq!(carousel.track_scrolled(37.0).units(), 0);
        assert!(carousel.is_animating());
    }

    #[test]
    fn repaint_starts_tween_toward_new_offset() {
        let mut carousel =
            CarouselUi::mount(&CarouselMarkup::complete(6), 1280.0, settings());
        let _ = update::update(&mut carousel, Message::Next);

        let stride = carousel.metrics().stride();
        assert!(carousel.is_animating());
        assert_eq!(carousel.frame().offset_px, stride);
        assert_eq!(carousel.animator.target(), stride);
    }
}
