//! Application state, built once at boot

use std::sync::Arc;

use iced::Size;
use lumen_config::SiteConfig;
use lumen_core::carousel::CarouselMarkup;
use lumen_core::{ContactSession, Debouncer, NavMenu};

use crate::content::TESTIMONIALS;
use crate::domains::Domains;
use crate::domains::carousel::CarouselUi;
use crate::domains::page::PageState;

#[derive(Debug)]
pub struct State {
    pub config: Arc<SiteConfig>,
    pub window_size: Size,
    /// Pending window width waiting for the resize burst to settle.
    pub resize: Debouncer<f32>,
    pub domains: Domains,
}

impl State {
    pub fn new(config: Arc<SiteConfig>) -> Self {
        let window_size = Size::new(config.window.width, config.window.height);
        let settings = config.carousel;

        let domains = Domains {
            carousel: CarouselUi::mount(
                &CarouselMarkup::complete(TESTIMONIALS.len()),
                window_size.width,
                settings,
            ),
            nav: NavMenu::new(
                config.header.scrolled_after_px,
                settings.breakpoints.tablet,
            ),
            page: PageState::new(config.reveal.offset_px, window_size.height),
            contact: ContactSession::new(
                config.contact.rules(),
                config.contact.submit_delay(),
            ),
        };

        Self {
            resize: Debouncer::new(settings.resize_debounce()),
            window_size,
            config,
            domains,
        }
    }
}
