use crate::RequestTimestamp;

/// Side effects requested by [`crate::update`]; executed by the app against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchVersions { timestamp: RequestTimestamp },
    Download { href: String, file_name: String },
}
