//! Locating and parsing the site configuration

use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::SiteConfig;

/// Path to a TOML or JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "LUMEN_CONFIG_PATH";
/// Inline JSON configuration.
pub const CONFIG_JSON_ENV: &str = "LUMEN_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "lumen.toml",
    "lumen.json",
    "config/lumen.toml",
    "config/lumen.json",
];

/// Encoding of a configuration file or inline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Tried in this order when the format is not known up front.
    pub const ALL: [Self; 2] = [Self::Toml, Self::Json];

    /// Format implied by the file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" | "tml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn decode(self, contents: &str) -> Result<SiteConfig, String> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|err| err.to_string()),
            Self::Json => {
                serde_json::from_str(contents).map_err(|err| err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Source that produced the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "${CONFIG_PATH_ENV} ({})", path.display())
            }
            Self::EnvInline => write!(f, "${CONFIG_JSON_ENV}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl SiteConfig {
    /// Load configuration using environment variables and the working
    /// directory. Evaluation order:
    /// 1) `$LUMEN_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$LUMEN_CONFIG_JSON` (inline JSON),
    /// 3) the first existing default file,
    /// 4) defaults.
    ///
    /// The loaded configuration is checked against the guard rails.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same as [`SiteConfig::load_from_env`] with an injectable variable
    /// lookup and base directory for the default file search.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = Self::locate(&lookup, base_dir)?;
        config
            .validate()
            .with_context(|| format!("invalid site config from {source}"))?;
        Ok((config, source))
    }

    fn locate<F>(
        lookup: &F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse(&raw, Some(ConfigFormat::Json))
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(base_dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read site config from {}", path.display())
        })?;
        Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("invalid site config {}", path.display()))
    }

    /// Decode `contents` as `format`. An unknown format tries TOML, then
    /// JSON, and reports both failures.
    pub fn parse(
        contents: &str,
        format: Option<ConfigFormat>,
    ) -> anyhow::Result<Self> {
        let candidates = match &format {
            Some(format) => std::slice::from_ref(format),
            None => &ConfigFormat::ALL[..],
        };

        let mut failures = Vec::with_capacity(candidates.len());
        for format in candidates {
            match format.decode(contents) {
                Ok(config) => return Ok(config),
                Err(err) => failures.push(format!("{format} error: {err}")),
            }
        }
        Err(anyhow!(failures.join("; ")))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.exists())
    }
}
