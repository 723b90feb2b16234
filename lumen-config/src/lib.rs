//! Configuration for the Lumen landing page.
//!
//! Defaults live in `lumen-core`'s constants; this crate layers files and
//! environment variables on top of them and enforces guard rails so a typo
//! in a file cannot leave the carousel spinning with a zero interval.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigFormat, ConfigSource};
pub use models::{
    ContactConfig, HeaderConfig, RevealConfig, SiteConfig, WindowConfig,
};
pub use validation::ConfigGuardRailError;
