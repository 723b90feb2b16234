//! Testimonial carousel
//!
//! A fixed sequence of slides viewed through a responsive window of one to
//! three slides. The state here is host-independent: the host reports
//! viewport widths, pointer drags and timer ticks, and paints the [`Frame`]
//! returned by [`CarouselState::render`].

pub mod autoplay;
pub mod error;
pub mod state;
pub mod swipe;
pub mod types;
pub mod viewport;

pub use autoplay::{Autoplay, Generation};
pub use error::{CarouselError, MountError};
pub use state::CarouselState;
pub use swipe::{SwipeDirection, SwipeTracker, classify_swipe};
pub use types::*;
pub use viewport::{MAX_VISIBLE, visible_count};
