//! Site config loading: source precedence, partial files and guard rails

use std::collections::HashMap;
use std::fs;

use lumen_config::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigFormat, ConfigSource, SiteConfig,
};
use lumen_core::carousel::IndicatorMode;
use tempfile::TempDir;

fn lookup_from(
    vars: &[(&str, String)],
) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = TempDir::new().unwrap();
    let (config, source) =
        SiteConfig::load_with(lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.carousel.autoplay_interval_ms, 5_000);
    assert_eq!(config.carousel.resize_debounce_ms, 250);
}

#[test]
fn partial_toml_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lumen.toml"),
        r#"
[carousel]
autoplay_interval_ms = 7000
indicator_mode = "per_position"

[carousel.breakpoints]
desktop = 1280.0
"#,
    )
    .unwrap();

    let (config, source) =
        SiteConfig::load_with(lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(dir.path().join("lumen.toml")));
    assert_eq!(config.carousel.autoplay_interval_ms, 7_000);
    assert_eq!(config.carousel.indicator_mode, IndicatorMode::PerPosition);
    assert_eq!(config.carousel.breakpoints.desktop, 1280.0);
    assert_eq!(config.carousel.breakpoints.tablet, 768.0);
    assert_eq!(config.carousel.swipe_threshold_px, 50.0);
}

#[test]
fn env_path_wins_over_default_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lumen.toml"), "[reveal]\noffset_px = 10.0\n")
        .unwrap();
    let custom = dir.path().join("custom.json");
    fs::write(&custom, r#"{ "reveal": { "offset_px": 99.0 } }"#).unwrap();

    let lookup =
        lookup_from(&[(CONFIG_PATH_ENV, custom.display().to_string())]);
    let (config, source) = SiteConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvPath(custom));
    assert_eq!(config.reveal.offset_px, 99.0);
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = TempDir::new().unwrap();
    let lookup = lookup_from(&[(
        CONFIG_JSON_ENV,
        r#"{ "contact": { "submit_delay_ms": 10 } }"#.to_string(),
    )]);
    let (config, source) = SiteConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvInline);
    assert_eq!(config.contact.submit_delay_ms, 10);
}

#[test]
fn blank_env_values_are_ignored() {
    let dir = TempDir::new().unwrap();
    let lookup = lookup_from(&[
        (CONFIG_PATH_ENV, "  ".to_string()),
        (CONFIG_JSON_ENV, String::new()),
    ]);
    let (_, source) = SiteConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::Default);
}

#[test]
fn guard_rails_reject_loaded_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lumen.toml"),
        "[carousel.breakpoints]\ntablet = 1200.0\ndesktop = 1024.0\n",
    )
    .unwrap();
    let err = SiteConfig::load_with(lookup_from(&[]), dir.path()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("must be below"), "{chain}");
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("lumen.toml"), "[carousel\n").unwrap();

    let err = SiteConfig::load_with(lookup_from(&[]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("lumen.toml"));
}

#[test]
fn extensionless_file_accepts_toml_or_json() {
    let toml = SiteConfig::parse("[header]\nheight_px = 60.0", None).unwrap();
    assert_eq!(toml.header.height_px, 60.0);

    let json =
        SiteConfig::parse(r#"{"header":{"height_px":64.0}}"#, None).unwrap();
    assert_eq!(json.header.height_px, 64.0);
}

#[test]
fn unrecognised_content_reports_every_format() {
    let err = SiteConfig::parse("carousel = ", None).unwrap_err().to_string();
    assert!(err.contains("toml error"), "{err}");
    assert!(err.contains("json error"), "{err}");
}

#[test]
fn extension_pins_the_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(&path, r#"{"header":{"height_px":64.0}}"#).unwrap();

    assert_eq!(ConfigFormat::from_path(&path), Some(ConfigFormat::Toml));
    let err = SiteConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("toml error"), "{err:#}");
    assert!(!format!("{err:#}").contains("json error"), "{err:#}");

    assert_eq!(
        ConfigFormat::from_path(std::path::Path::new("lumen.JSON")),
        Some(ConfigFormat::Json)
    );
    assert_eq!(ConfigFormat::from_path(std::path::Path::new("lumen")), None);
}
