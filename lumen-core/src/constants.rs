//! Interaction constants
//!
//! Defaults for every tunable behaviour on the landing page. Configuration
//! files override these through `lumen-config`; anything not overridden
//! falls back to the values here.

/// Carousel timing, gesture and layout defaults.
pub mod carousel {
    /// Interval between automatic advances (ms).
    pub const AUTOPLAY_INTERVAL_MS: u64 = 5_000;
    /// Quiet window a resize burst must settle for before recomputing (ms).
    pub const RESIZE_DEBOUNCE_MS: u64 = 250;
    /// Minimum horizontal travel (px) for a drag to count as a swipe.
    /// Travel must be strictly greater than this value.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
    /// Gap between adjacent slide cards (px).
    pub const SLIDE_GAP_PX: f32 = 30.0;
}

/// Viewport breakpoints shared by the carousel and the navigation menu.
pub mod breakpoints {
    /// Widths at or above this show two slides and the full nav bar.
    pub const TABLET_MIN_WIDTH: f32 = 768.0;
    /// Widths at or above this show three slides.
    pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;
}

pub mod reveal {
    /// Distance (px) above the bottom edge of the viewport an element's top
    /// must cross before it is revealed.
    pub const OFFSET_PX: f32 = 150.0;
}

pub mod header {
    /// Page scroll offset (px) after which the header switches to its
    /// compact "scrolled" style.
    pub const SCROLLED_AFTER_PX: f32 = 50.0;
}

pub mod contact {
    pub const MIN_NAME_CHARS: usize = 2;
    pub const MIN_MESSAGE_CHARS: usize = 10;
    /// Simulated round trip for a form submission (ms).
    pub const SUBMIT_DELAY_MS: u64 = 1_500;
}
