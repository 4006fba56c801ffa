use codex_logging::{codex_debug, codex_warn};
use serde_json::Value;

/// Fallback shown when an error carries nothing readable.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A failed request as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportError {
    pub message: String,
    pub response: Option<ErrorResponse>,
}

/// The server's answer to a failed request, when there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub data: Option<Value>,
}

impl TransportError {
    /// An error that never reached the server, or got no answer.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    pub fn with_response(message: impl Into<String>, status: u16, data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            response: Some(ErrorResponse { status, data }),
        }
    }

    fn body(&self) -> Option<&Value> {
        self.response
            .as_ref()
            .and_then(|response| response.data.as_ref())
            .filter(|data| !data.is_null())
    }
}

/// Flattens an error body into display strings, depth first.
///
/// Never returns an empty list: anything unreadable becomes [`UNKNOWN_ERROR`].
pub fn normalize_errors(error: &TransportError) -> Vec<String> {
    let mut errors = Vec::new();
    match error.body() {
        Some(data) => {
            flatten_into(data, &mut errors);
            if errors.is_empty() {
                codex_debug!("Error body had no readable messages: {}", data);
            }
        }
        None => codex_warn!("Unable to parse error: {}", error.message),
    }
    if errors.is_empty() {
        errors.push(UNKNOWN_ERROR.to_string());
    }
    errors
}

fn flatten_into(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => out.push(text.clone()),
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        Value::Number(number) => out.push(number.to_string()),
        Value::Bool(flag) => out.push(flag.to_string()),
        // Objects are not part of the expected shape.
        Value::Null | Value::Object(_) => {}
    }
}
