//! Shared types for the carousel module

use std::time::Duration;

use crate::constants::{breakpoints, carousel};

/// How indicator dots map onto carousel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndicatorMode {
    /// One dot per slide. When more than one slide is visible the trailing
    /// dots can never become active, because the index stops at
    /// `total - visible_count`.
    #[default]
    PerSlide,
    /// One dot per navigable position (`total - visible_count + 1`).
    PerPosition,
}

/// Width thresholds for the responsive visible-slide count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Breakpoints {
    pub tablet: f32,
    pub desktop: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: breakpoints::TABLET_MIN_WIDTH,
            desktop: breakpoints::DESKTOP_MIN_WIDTH,
        }
    }
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselSettings {
    pub autoplay_interval_ms: u64,
    pub resize_debounce_ms: u64,
    pub swipe_threshold_px: f32,
    pub slide_gap_px: f32,
    pub breakpoints: Breakpoints,
    pub indicator_mode: IndicatorMode,
    /// Start autoplay as soon as the carousel mounts.
    pub autoplay: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: carousel::AUTOPLAY_INTERVAL_MS,
            resize_debounce_ms: carousel::RESIZE_DEBOUNCE_MS,
            swipe_threshold_px: carousel::SWIPE_THRESHOLD_PX,
            slide_gap_px: carousel::SLIDE_GAP_PX,
            breakpoints: Breakpoints::default(),
            indicator_mode: IndicatorMode::PerSlide,
            autoplay: true,
        }
    }
}

impl CarouselSettings {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Snapshot of the markup the carousel is mounted on.
///
/// The host builds this from whatever it actually rendered; absent pieces
/// are reported as zero counts or `false` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselMarkup {
    pub has_track: bool,
    pub slides: usize,
    pub indicators: usize,
    pub has_prev_button: bool,
    pub has_next_button: bool,
}

impl CarouselMarkup {
    /// Markup with a track, `slides` cards, one dot per card and both buttons.
    pub fn complete(slides: usize) -> Self {
        Self {
            has_track: true,
            slides,
            indicators: slides,
            has_prev_button: true,
            has_next_button: true,
        }
    }
}

/// Measured slide geometry, read from the host after layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideMetrics {
    pub slide_width: f32,
    pub gap: f32,
}

impl SlideMetrics {
    /// Derive the slide width that fills `track_width` with `visible`
    /// slides separated by `gap`.
    pub fn fill(track_width: f32, visible: usize, gap: f32) -> Self {
        let visible = visible.max(1) as f32;
        let gaps = (visible - 1.0) * gap.max(0.0);
        Self {
            slide_width: ((track_width - gaps) / visible).max(0.0),
            gap: gap.max(0.0),
        }
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        self.slide_width + self.gap
    }
}

/// Presentation state produced by every render: where the track sits and
/// which indicator is lit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Horizontal translation of the track (px, positive moves content left).
    pub offset_px: f32,
    pub indicators: Vec<bool>,
}

impl Frame {
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|active| *active)
    }
}
