//! Configuration sections
//!
//! Every section carries `#[serde(default)]`, so a file only needs the keys
//! it wants to change.

use std::time::Duration;

use lumen_core::carousel::CarouselSettings;
use lumen_core::constants::{contact, header, reveal};
use lumen_core::contact::ValidationRules;
use serde::{Deserialize, Serialize};

/// Root configuration for the landing page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Testimonial carousel timing, gesture threshold, breakpoints and
    /// indicator mode.
    pub carousel: CarouselSettings,
    pub reveal: RevealConfig,
    pub header: HeaderConfig,
    pub contact: ContactConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    /// How far (px) above the bottom of the viewport a section's top must
    /// rise before it animates in. Larger values reveal later.
    pub offset_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            offset_px: reveal::OFFSET_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Page scroll (px) after which the header switches to its compact style.
    pub scrolled_after_px: f32,
    /// Height (px) of the fixed header; in-page links scroll their target
    /// section to just below it.
    pub height_px: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: header::SCROLLED_AFTER_PX,
            height_px: 72.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub min_name_chars: usize,
    pub min_message_chars: usize,
    /// Simulated submission round trip (ms). No request is ever sent.
    pub submit_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            min_name_chars: contact::MIN_NAME_CHARS,
            min_message_chars: contact::MIN_MESSAGE_CHARS,
            submit_delay_ms: contact::SUBMIT_DELAY_MS,
        }
    }
}

impl ContactConfig {
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            min_name_chars: self.min_name_chars,
            min_message_chars: self.min_message_chars,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}
