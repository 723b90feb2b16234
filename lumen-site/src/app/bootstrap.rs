use std::sync::Arc;

use iced::Task;
use lumen_config::{ConfigSource, SiteConfig};

use crate::domains::page;
use crate::messages::DomainMessage;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub site: Arc<SiteConfig>,
    pub source: ConfigSource,
}

impl AppConfig {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
            source: ConfigSource::Default,
        }
    }

    /// Load the site configuration from the environment. A configuration
    /// that fails to load or breaks a guard rail is logged and replaced by
    /// the defaults so the page still opens.
    pub fn from_environment() -> Self {
        match SiteConfig::load_from_env() {
            Ok((site, source)) => {
                log::info!("site configuration loaded from {source}");
                Self {
                    site: Arc::new(site),
                    source,
                }
            }
            Err(err) => {
                log::warn!("{err:#}; falling back to built-in defaults");
                Self::new(SiteConfig::default())
            }
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

/// Build the initial state without touching the runtime.
pub fn base_state(config: &AppConfig) -> State {
    boot_state(config).0
}

pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let (state, task) = boot_state(config);
    log::debug!(
        "booted: carousel {}, {} reveal targets",
        if state.domains.carousel.is_enabled() {
            "enabled"
        } else {
            "disabled"
        },
        state.domains.page.reveal.len()
    );
    (state, task)
}

fn boot_state(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let mut state = State::new(Arc::clone(&config.site));

    // Whatever already sits inside the first screen is revealed up front
    let viewport_height = state.window_size.height;
    let task = page::update::apply_scroll(&mut state, 0.0, viewport_height);

    (state, task)
}
