use codex_api::{ApiError, FailureKind};
use codex_app::mapping::{to_transport_error, versions_loaded};
use codex_core::{normalize_errors, Msg, VersionInfo, UNKNOWN_ERROR};
use pretty_assertions::assert_eq;
use serde_json::json;

fn status_error(status: u16, body: Option<serde_json::Value>) -> ApiError {
    ApiError {
        kind: FailureKind::HttpStatus(status),
        message: format!("Request failed with status code {status}"),
        status: Some(status),
        body,
    }
}

#[test]
fn http_errors_keep_their_body() {
    let err = to_transport_error(status_error(400, Some(json!(["A", ["B", "C"]]))));
    let response = err.response.as_ref().expect("response");
    assert_eq!(response.status, 400);
    assert_eq!(normalize_errors(&err), vec!["A", "B", "C"]);
}

#[test]
fn network_errors_have_no_response() {
    let err = to_transport_error(ApiError {
        kind: FailureKind::Network,
        message: "connection refused".to_string(),
        status: None,
        body: None,
    });
    assert!(err.response.is_none());
    assert!(err.message.contains("connection refused"));
    assert_eq!(normalize_errors(&err), vec![UNKNOWN_ERROR]);
}

#[test]
fn version_payload_is_taken_verbatim() {
    let msg = versions_loaded(Ok(json!({"installed": "1.0", "latest": "1.2", "extra": 1})));
    assert_eq!(
        msg,
        Msg::VersionsLoaded(Ok(VersionInfo {
            installed: Some("1.0".to_string()),
            latest: Some("1.2".to_string()),
        }))
    );
}

#[test]
fn non_object_payload_is_a_failed_load() {
    let msg = versions_loaded(Ok(json!(["1.0"])));
    assert!(matches!(msg, Msg::VersionsLoaded(Err(reason)) if reason.contains("unexpected version payload")));
}

#[test]
fn transport_failure_is_a_failed_load() {
    let msg = versions_loaded(Err(status_error(503, None)));
    assert!(matches!(msg, Msg::VersionsLoaded(Err(reason)) if reason.contains("503")));
}
