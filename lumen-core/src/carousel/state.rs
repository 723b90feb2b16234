//! CarouselState: index-based slide window with wrap-around navigation

use super::autoplay::Autoplay;
use super::error::{CarouselError, MountError};
use super::swipe::{SwipeDirection, classify_swipe};
use super::types::{
    CarouselMarkup, CarouselSettings, Frame, IndicatorMode, SlideMetrics,
};
use super::viewport::visible_count;

/// Carousel controller state.
///
/// The slide set is fixed at mount. `current_index` is the index of the
/// left-most visible slide and stays within `0..=max_index()` after every
/// transition.
#[derive(Debug, Clone)]
pub struct CarouselState {
    current_index: usize,
    visible_count: usize,
    total: usize,
    indicator_count: usize,
    viewport_width: f32,
    settings: CarouselSettings,
    autoplay: Autoplay,
}

impl CarouselState {
    /// Mount a carousel over `markup` at the current viewport width.
    ///
    /// Missing markup is not recoverable for the session; callers keep the
    /// carousel disabled when this returns an error.
    pub fn mount(
        markup: &CarouselMarkup,
        viewport_width: f32,
        settings: CarouselSettings,
    ) -> Result<Self, MountError> {
        if !markup.has_track {
            return Err(MountError::MissingTrack);
        }
        if markup.slides == 0 {
            return Err(MountError::NoSlides);
        }

        // Dots address slides by index, so a partial set would leave later
        // positions with nothing lit
        let indicator_count = match markup.indicators {
            0 => 0,
            n if n == markup.slides => n,
            n => {
                log::warn!(
                    "carousel markup has {n} indicators for {} slides; drawing one per slide",
                    markup.slides
                );
                markup.slides
            }
        };

        let mut autoplay = Autoplay::new(settings.autoplay);
        if settings.autoplay {
            autoplay.start();
        }

        let state = Self {
            current_index: 0,
            visible_count: visible_count(viewport_width, &settings.breakpoints),
            total: markup.slides,
            indicator_count,
            viewport_width,
            settings,
            autoplay,
        };

        log::debug!(
            "carousel mounted: {} slides, {} indicators, {} visible",
            state.total,
            state.indicator_count,
            state.visible_count
        );

        Ok(state)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn autoplay_mut(&mut self) -> &mut Autoplay {
        &mut self.autoplay
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_live()
    }

    /// Highest valid start index. Zero when every slide fits on screen.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible_count)
    }

    /// Number of distinct resting positions.
    #[inline]
    pub fn positions(&self) -> usize {
        self.max_index() + 1
    }

    /// Advance one slide, wrapping to the start after the last position.
    pub fn next(&mut self) {
        let from = self.current_index;
        self.current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        log::trace!("carousel next: {from} -> {}", self.current_index);
    }

    /// Retreat one slide, wrapping to the last position from the start.
    pub fn prev(&mut self) {
        let from = self.current_index;
        self.current_index = if self.current_index == 0 {
            self.max_index()
        } else {
            self.current_index - 1
        };
        log::trace!("carousel prev: {from} -> {}", self.current_index);
    }

    /// Jump to the position that starts at slide `index`.
    ///
    /// Indices past the last slide are rejected and leave the state
    /// untouched. Indices of real slides beyond `max_index()` (trailing dots
    /// in per-slide mode) settle on the last position, which still shows
    /// that slide.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.total {
            return Err(CarouselError::IndexOutOfRange {
                index,
                total: self.total,
            });
        }
        let from = self.current_index;
        self.current_index = index.min(self.max_index());
        log::trace!("carousel go_to({index}): {from} -> {}", self.current_index);
        Ok(())
    }

    /// Apply a settled viewport width. Returns `true` when the visible count
    /// changed.
    ///
    /// The index is kept, then clamped if the wider window pushed it past
    /// the new `max_index()`.
    pub fn on_resize(&mut self, viewport_width: f32) -> bool {
        self.viewport_width = viewport_width;
        let previous = self.visible_count;
        self.visible_count =
            visible_count(viewport_width, &self.settings.breakpoints);

        let max = self.max_index();
        if self.current_index > max {
            log::debug!(
                "carousel index {} clamped to {max} after resize",
                self.current_index
            );
            self.current_index = max;
        }

        previous != self.visible_count
    }

    /// Translate a completed drag into at most one transition.
    pub fn handle_swipe(
        &mut self,
        start_x: f32,
        end_x: f32,
    ) -> Option<SwipeDirection> {
        let direction =
            classify_swipe(start_x, end_x, self.settings.swipe_threshold_px)?;
        match direction {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
        }
        Some(direction)
    }

    /// Number of indicator dots the host should draw.
    pub fn indicator_count(&self) -> usize {
        match self.settings.indicator_mode {
            IndicatorMode::PerSlide => self.indicator_count,
            IndicatorMode::PerPosition if self.indicator_count > 0 => {
                self.positions()
            }
            IndicatorMode::PerPosition => 0,
        }
    }

    /// Compute the presentation for the current position.
    pub fn render(&self, metrics: SlideMetrics) -> Frame {
        let offset_px = self.current_index as f32 * metrics.stride();
        let indicators = (0..self.indicator_count())
            .map(|i| i == self.current_index)
            .collect();
        Frame {
            offset_px,
            indicators,
        }
    }
}
