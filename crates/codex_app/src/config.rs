use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use codex_api::TransportSettings;
use codex_logging::{codex_info, codex_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LogDestination;

pub const CONFIG_FILENAME: &str = "codex.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub download_dir: PathBuf,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: TransportSettings::default().base_url,
            download_dir: PathBuf::from("downloads"),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// Reads `path`. `Ok(None)` when the file does not exist.
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Like [`AppConfig::try_load`], but falls back to defaults and hands back the
    /// error so it can be reported once logging is up.
    pub fn resolve(path: &Path) -> (Self, Option<ConfigError>) {
        match Self::try_load(path) {
            Ok(config) => (config.unwrap_or_default(), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Like [`AppConfig::resolve`], logging any error immediately.
    pub fn load_or_default(path: &Path) -> Self {
        let (config, err) = Self::resolve(path);
        match err {
            Some(err) => codex_warn!("{}; using defaults", err),
            None => codex_info!("Using config for {:?}", path),
        }
        config
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            base_url: self.base_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..TransportSettings::default()
        }
    }
}
