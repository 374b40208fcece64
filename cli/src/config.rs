// SPDX-FileCopyrightText: 2026 Semestra contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use semestra_core::APP_NAME;

const SEMESTRA_CONFIG_ENV: &str = "SEMESTRA_CONFIG";

/// Configuration for the semestra CLI: where the stored calendar lives.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the JSON file holding the event rows.
    pub events_path: PathBuf,

    /// Path to the JSON file holding the activity rows.
    pub activities_path: PathBuf,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Locates and parses the configuration file.
///
/// Order: explicit `--config` path, then `SEMESTRA_CONFIG`, then
/// `<config dir>/semestra/config.toml`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SEMESTRA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::config_dir().ok_or_else(|| "User-specific config directory not found".into())
}
