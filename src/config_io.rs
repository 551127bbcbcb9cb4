//! Config file discovery and loading.
//!
//! Resolution order: an explicit `--config` path (which must load), then the
//! user config file if it exists, then built-in defaults.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// `~/.config/termfolio/config.json` (platform equivalent via `dirs`).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termfolio").join("config.json"))
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    User(PathBuf),
    Defaults,
}

/// Load the effective configuration.
///
/// An explicit path that fails to load is an error. A broken user config is
/// logged and replaced by defaults so the portfolio still starts.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_from(explicit, user_config_path().as_deref())
}

fn load_config_from(
    explicit: Option<&Path>,
    user_path: Option<&Path>,
) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = Config::load_from_file(path)?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(path) = user_path.filter(|p| p.exists()) {
        match Config::load_from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded user config from {}", path.display());
                return Ok((config, ConfigSource::User(path.to_path_buf())));
            }
            Err(e) => {
                tracing::warn!("Ignoring user config {}: {}", path.display(), e);
            }
        }
    }

    tracing::debug!("Using built-in default config");
    Ok((Config::default(), ConfigSource::Defaults))
}
