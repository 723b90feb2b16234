//! Header navigation adapter

pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;
