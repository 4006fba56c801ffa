//! Translation between API results and store messages.

use codex_api::ApiError;
use codex_core::{Msg, TransportError, VersionInfo};
use serde_json::Value;

pub fn to_transport_error(err: ApiError) -> TransportError {
    match err.status {
        Some(status) => TransportError::with_response(err.message, status, err.body),
        None => TransportError::new(err.to_string()),
    }
}

/// The payload is taken as-is; only a body that is not an object of optional
/// strings is treated as a failed load.
pub fn versions_loaded(result: Result<Value, ApiError>) -> Msg {
    let versions = result
        .map_err(|err| err.to_string())
        .and_then(|body| {
            serde_json::from_value::<VersionInfo>(body)
                .map_err(|err| format!("unexpected version payload: {err}"))
        });
    Msg::VersionsLoaded(versions)
}
