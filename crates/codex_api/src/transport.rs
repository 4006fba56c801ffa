use std::time::Duration;

use bytes::Bytes;
use codex_logging::codex_trace;
use futures_util::StreamExt;
use reqwest::Url;
use serde_json::Value;

use crate::{ApiError, FailureKind};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Prefix for every relative path, e.g. `http://localhost:9810/api/v3`.
    pub base_url: String,
    /// `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,
    /// `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9810/api/v3".to_string(),
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 10,
        }
    }
}

/// The HTTP collaborator behind [`crate::CommonApi`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` (relative to the base URL, or absolute) and decode the body as JSON.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;

    /// GET `url` and return the raw body.
    async fn get_blob(&self, url: &str) -> Result<Bytes, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    /// Absolute URLs pass through; anything else is appended to the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }
        let joined = format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn send(&self, url: Url) -> Result<reqwest::Response, ApiError> {
        codex_trace!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are kept when they are JSON so the store can show them.
            let body = response
                .bytes()
                .await
                .ok()
                .and_then(|raw| serde_json::from_slice::<Value>(&raw).ok());
            return Err(ApiError::http_status(status.as_u16(), body));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let mut url = self.resolve(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let response = self.send(url).await?;
        let raw = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&raw).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }

    async fn get_blob(&self, url: &str) -> Result<Bytes, ApiError> {
        let url = self.resolve(url)?;
        let response = self.send(url).await?;

        // Content-Length is not trusted for sizing; the buffer grows with what arrives.
        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            bytes.extend_from_slice(&chunk);
            codex_trace!("blob received {} bytes", bytes.len());
        }
        Ok(Bytes::from(bytes))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ApiError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
