//! Config file resolution and loading.

use crate::schema::HostConfig;
use anyhow::{Context, Result};
use nacelle_core::HostError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the Nacelle config directory.
/// Priority: `NACELLE_CONFIG_DIR` env > `~/.nacelle/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NACELLE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".nacelle");
    }
    PathBuf::from(".nacelle")
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<HostConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(HostConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("read config at {}", path.display()))?;
    let config: HostConfig = serde_yaml::from_str(&raw)
        .map_err(|e| HostError::ConfigError(format!("{}: {e}", path.display())))?;
    Ok(config)
}
