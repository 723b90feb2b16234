use lumen_site::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("lumen_site", LevelFilter::Debug)
        .filter_module("lumen_core", LevelFilter::Info)
        .filter_module("lumen_config", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    // Pick up LUMEN_CONFIG_* and RUST_LOG from a local .env
    let dotenv = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    match dotenv {
        Ok(path) => log::info!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => log::warn!("ignoring unreadable .env file: {err}"),
    }

    let config = AppConfig::from_environment();

    app::run(config)
}
