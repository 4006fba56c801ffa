use std::path::PathBuf;
use std::sync::Arc;

use codex_logging::{codex_info, codex_warn};
use serde_json::Value;
use thiserror::Error;

use crate::persist::{PersistError, StagedBlob};
use crate::{ApiError, SaveTrigger, Transport};

pub const VERSION_PATH: &str = "/version";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("fetch failed: {0}")]
    Transport(#[from] ApiError),
    #[error("save failed: {0}")]
    Persist(#[from] PersistError),
}

/// The common endpoints: version lookup and the in-app download.
///
/// Holds no state of its own beyond its collaborators.
#[derive(Clone)]
pub struct CommonApi {
    transport: Arc<dyn Transport>,
    save_trigger: Arc<dyn SaveTrigger>,
}

impl CommonApi {
    pub fn new(transport: Arc<dyn Transport>, save_trigger: Arc<dyn SaveTrigger>) -> Self {
        Self {
            transport,
            save_trigger,
        }
    }

    /// Fetch version metadata; `timestamp` is sent as `ts` to defeat caches.
    pub async fn fetch_versions(&self, timestamp: u64) -> Result<Value, ApiError> {
        self.transport
            .get_json(VERSION_PATH, &[("ts", timestamp.to_string())])
            .await
    }

    /// Fetch `href` ourselves and save it under `file_name`.
    ///
    /// Standalone (installed) web-app shells on some mobile platforms strand the
    /// user on a blank screen when following a direct download link. Staging the
    /// bytes locally and saving from there keeps navigation inside the app.
    /// Failures are logged and never reach the caller.
    pub async fn download_with_platform_fix(&self, href: &str, file_name: &str) {
        match self.try_download(href, file_name).await {
            Ok(path) => codex_info!("Downloaded {} to {:?}", href, path),
            Err(err) => codex_warn!("Download of {} failed: {}", href, err),
        }
    }

    pub async fn try_download(&self, href: &str, file_name: &str) -> Result<PathBuf, DownloadError> {
        let bytes = self.transport.get_blob(href).await?;
        let blob = StagedBlob::stage(&bytes)?;
        let saved = self.save_trigger.save(&blob, file_name)?;
        drop(blob);
        Ok(saved)
    }
}
