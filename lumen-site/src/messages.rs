//! Root message router

use iced::Size;
use lumen_core::Ticket;

use crate::domains::{carousel, contact, nav, page};

#[derive(Debug, Clone)]
pub enum DomainMessage {
    Carousel(carousel::Message),
    Nav(nav::Message),
    Page(page::Message),
    Contact(contact::Message),

    /// Raw resize event; applied to the carousel once the burst settles.
    WindowResized(Size),
    ResizeSettled(Ticket),

    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Carousel(msg) => msg.name(),
            Self::Nav(msg) => msg.name(),
            Self::Page(msg) => msg.name(),
            Self::Contact(msg) => msg.name(),
            Self::WindowResized(_) => "WindowResized",
            Self::ResizeSettled(_) => "ResizeSettled",
            Self::NoOp => "NoOp",
        }
    }
}

impl From<carousel::Message> for DomainMessage {
    fn from(msg: carousel::Message) -> Self {
        DomainMessage::Carousel(msg)
    }
}

impl From<nav::Message> for DomainMessage {
    fn from(msg: nav::Message) -> Self {
        DomainMessage::Nav(msg)
    }
}

impl From<page::Message> for DomainMessage {
    fn from(msg: page::Message) -> Self {
        DomainMessage::Page(msg)
    }
}

impl From<contact::Message> for DomainMessage {
    fn from(msg: contact::Message) -> Self {
        DomainMessage::Contact(msg)
    }
}
