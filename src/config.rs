use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

static DEFAULT_UID_DOMAIN: &str = "icsgen.local";

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

/// Configuration at ~/.config/icsgen/config.toml
#[derive(Debug, Deserialize)]
pub struct Config {
    /// PRODID for generated calendars (falls back to the library default)
    pub product_id: Option<String>,

    /// Domain appended to generated UIDs (`<uuid>@<domain>`)
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            product_id: None,
            uid_domain: default_uid_domain(),
        }
    }
}

/// Get the config file path (~/.config/icsgen/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("icsgen");
    Ok(config_dir.join("config.toml"))
}

/// Load config from `path`, or the default location when None.
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
