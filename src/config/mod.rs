// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file and the log file
//! that lives beside it.

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "tapeui";

const LOG_FILE_NAME: &str = "tapeui.log";

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:3030";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_url: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// The per-request timeout, if one is configured. Zero means none.
    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Routes `log` output to a file next to the configuration file.
///
/// The terminal belongs to the TUI, so nothing may be logged to stdout or
/// stderr while it is running. `RUST_LOG` takes precedence over the level in
/// the configuration file.
pub fn init_logging(config: &AppConfig) -> Result<PathBuf> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration directory")?
        .with_file_name(LOG_FILE_NAME);

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).context("Failed to create configuration directory")?;
    }
    let file = File::create(&path).context("Failed to create log file")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init()
    .context("Failed to initialise logger")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_a_local_server_without_timeout() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:3030");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn zero_timeout_means_none() {
        let config = AppConfig {
            request_timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(config.request_timeout(), None);

        let config = AppConfig {
            request_timeout_secs: Some(10),
            ..AppConfig::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
    }
}
