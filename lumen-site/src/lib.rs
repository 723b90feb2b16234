//! Lumen Aesthetics landing page.
//!
//! An iced application that renders the page and translates window,
//! pointer, keyboard and timer events into `lumen-core` transitions.

pub mod app;
pub mod content;
pub mod domains;
pub mod layout;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
