//! Page layout constants
//!
//! Sections have fixed heights so their page offsets are known without a
//! layout pass; in-page links and the reveal tracker both rely on this.

/// Horizontal padding either side of the page content.
pub const PAGE_PADDING: f32 = 32.0;
/// Content never grows wider than this.
pub const MAX_CONTENT_WIDTH: f32 = 1140.0;
/// Room reserved either side of the carousel track for prev/next buttons.
pub const CAROUSEL_BUTTON_GUTTER: f32 = 56.0;
pub const CAROUSEL_TRACK_HEIGHT: f32 = 240.0;
/// Duration of the slide transition (ms).
pub const SLIDE_TRANSITION_MS: u64 = 500;
/// ~60 FPS while a slide transition is running.
pub const ANIMATION_TICK_NS: u64 = 16_666_667;

/// Width available to page content at `window_width`.
pub fn content_width(window_width: f32) -> f32 {
    (window_width - 2.0 * PAGE_PADDING).clamp(0.0, MAX_CONTENT_WIDTH)
}

/// Width of the carousel's visible track at `window_width`.
pub fn carousel_track_width(window_width: f32) -> f32 {
    (content_width(window_width) - 2.0 * CAROUSEL_BUTTON_GUTTER).max(0.0)
}
