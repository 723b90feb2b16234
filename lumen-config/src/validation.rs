//! Guard rails applied after loading

use thiserror::Error;

use crate::models::SiteConfig;

/// Settings that would leave the page misbehaving rather than merely
/// looking different.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "carousel.breakpoints.tablet ({tablet}) must be below carousel.breakpoints.desktop ({desktop})"
    )]
    InvertedBreakpoints { tablet: f32, desktop: f32 },
    #[error("carousel.breakpoints.tablet must be a positive width, got {0}")]
    NonPositiveBreakpoint(f32),
    #[error("carousel.autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval,
    #[error("carousel.resize_debounce_ms must be greater than zero")]
    ZeroResizeDebounce,
    #[error("carousel.swipe_threshold_px must be zero or more, got {0}")]
    NegativeSwipeThreshold(f32),
    #[error("carousel.slide_gap_px must be zero or more, got {0}")]
    NegativeSlideGap(f32),
    #[error("contact.min_message_chars must be at least 1")]
    ZeroMessageLength,
}

impl SiteConfig {
    /// Check every guard rail, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        let carousel = &self.carousel;
        let bp = carousel.breakpoints;

        // Written as negations so NaN fails too.
        if !(bp.tablet > 0.0) {
            return Err(ConfigGuardRailError::NonPositiveBreakpoint(bp.tablet));
        }
        if !(bp.tablet < bp.desktop) {
            return Err(ConfigGuardRailError::InvertedBreakpoints {
                tablet: bp.tablet,
                desktop: bp.desktop,
            });
        }
        if carousel.autoplay_interval_ms == 0 {
            return Err(ConfigGuardRailError::ZeroAutoplayInterval);
        }
        if carousel.resize_debounce_ms == 0 {
            return Err(ConfigGuardRailError::ZeroResizeDebounce);
        }
        if !(carousel.swipe_threshold_px >= 0.0) {
            return Err(ConfigGuardRailError::NegativeSwipeThreshold(
                carousel.swipe_threshold_px,
            ));
        }
        if !(carousel.slide_gap_px >= 0.0) {
            return Err(ConfigGuardRailError::NegativeSlideGap(
                carousel.slide_gap_px,
            ));
        }
        if self.contact.min_message_chars == 0 {
            return Err(ConfigGuardRailError::ZeroMessageLength);
        }
        Ok(())
    }
}
