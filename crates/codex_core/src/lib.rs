//! Codex core: pure common-store state, messages and view-model helpers.
mod effect;
mod errors;
mod msg;
mod state;
mod update;
mod version;
mod view_model;

pub use effect::Effect;
pub use errors::{normalize_errors, ErrorResponse, TransportError, UNKNOWN_ERROR};
pub use msg::Msg;
pub use state::{CommonState, FormFeedback, RequestTimestamp, VersionInfo};
pub use update::update;
pub use version::is_newer_version;
pub use view_model::CommonView;
