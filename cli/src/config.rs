// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tick_api::ApiConfig;
use tokio::fs;

const TICK_CONFIG_ENV: &str = "TICK_CONFIG";

/// Application name, used for the config directory.
pub const APP_NAME: &str = "tick";

/// Resolves and parses the configuration.
///
/// Precedence: the `--config` flag, then the `TICK_CONFIG` environment
/// variable, then `config.toml` in the user config directory. When none of
/// them names a file, the built-in defaults apply: the local-development
/// backend at `http://localhost:3001`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(TICK_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        match get_config_dir() {
            Ok(dir) => Some(dir.join(format!("{APP_NAME}/config.toml"))).filter(|p| p.exists()),
            Err(_) => None,
        }
    };

    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(Config::default());
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the tick client.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default = "default_api")]
    pub api: ApiConfig,
}

fn default_api() -> ApiConfig {
    ApiConfig {
        base_url: "http://localhost:3001".to_string(),
        ..Default::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { api: default_api() }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
