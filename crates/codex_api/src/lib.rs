//! Codex API: HTTP transport, the common endpoints and effect execution.
mod client;
mod engine;
mod persist;
mod save;
mod transport;
mod types;

pub use client::{CommonApi, DownloadError, VERSION_PATH};
pub use engine::ApiHandle;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError, StagedBlob};
pub use save::{sanitize_file_name, DirectorySaveTrigger, SaveTrigger};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{ApiError, ApiEvent, FailureKind};
