//! # Lumen Core
//!
//! Interaction logic for the Lumen Aesthetics landing page, kept free of any
//! windowing or rendering dependency so it can be driven and tested without
//! a host.
//!
//! ## Modules
//!
//! - [`carousel`]: the testimonial carousel, its autoplay timer bookkeeping
//!   and swipe detection
//! - [`debounce`]: trailing-edge debouncing for bursty host events (resize)
//! - [`nav`]: mobile menu toggle, header styling and in-page link targets
//! - [`reveal`]: scroll-triggered reveal of page sections
//! - [`contact`]: contact form validation and the simulated submission
//!
//! ## Feature Flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` for settings types so they can
//!   be embedded in configuration files

pub mod carousel;
pub mod constants;
pub mod contact;
pub mod debounce;
pub mod nav;
pub mod reveal;

pub use carousel::{CarouselSettings, CarouselState};
pub use contact::{ContactSession, ValidationRules};
pub use debounce::{Debouncer, Ticket};
pub use nav::NavMenu;
pub use reveal::RevealTracker;
