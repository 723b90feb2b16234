use std::sync::Arc;

use iced::{Settings, Size, Theme};

use crate::state::State;
use crate::theme::LumenTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the landing page with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let window = Size::new(config.site().window.width, config.site().window.height);
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Lumen Aesthetics")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: window,
        min_size: Some(Size::new(360.0, 480.0)),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("lumen-site".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    LumenTheme::theme()
}
