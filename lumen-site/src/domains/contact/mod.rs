//! Contact form adapter

pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;
