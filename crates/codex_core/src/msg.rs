#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Request fresh version metadata from the server.
    LoadVersions,
    /// Version fetch finished. The error carries a description for the log only.
    VersionsLoaded(Result<crate::VersionInfo, String>),
    /// User asked to save a remote resource under `file_name`.
    DownloadRequested { href: String, file_name: String },
    /// A form submission failed at the transport layer.
    ErrorsReported(crate::TransportError),
    /// A form submission succeeded.
    SuccessReported(String),
    /// Dismiss any form feedback.
    FeedbackCleared,
    NoOp,
}
