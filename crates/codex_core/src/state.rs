use std::fmt;

use serde::{Deserialize, Serialize};

use crate::view_model::CommonView;

/// Cache-busting token captured once when the store is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestTimestamp(u64);

impl RequestTimestamp {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version metadata as served by `/version`.
///
/// Both fields are optional so a fetched payload can replace the value verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    pub installed: Option<String>,
    pub latest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFeedback {
    pub errors: Vec<String>,
    pub success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonState {
    form: FormFeedback,
    versions: VersionInfo,
    timestamp: RequestTimestamp,
    dirty: bool,
}

impl CommonState {
    pub fn new(installed: impl Into<String>, timestamp: RequestTimestamp) -> Self {
        Self {
            form: FormFeedback::default(),
            versions: VersionInfo {
                installed: Some(installed.into()),
                latest: None,
            },
            timestamp,
            dirty: false,
        }
    }

    pub fn view(&self) -> CommonView {
        CommonView {
            errors: self.form.errors.clone(),
            success: self.form.success.clone(),
            installed: self.versions.installed.clone(),
            latest: self.versions.latest.clone(),
        }
    }

    pub fn form(&self) -> &FormFeedback {
        &self.form
    }

    pub fn versions(&self) -> &VersionInfo {
        &self.versions
    }

    pub fn timestamp(&self) -> RequestTimestamp {
        self.timestamp
    }

    /// Returns whether state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn replace_versions(&mut self, versions: VersionInfo) {
        if self.versions != versions {
            self.versions = versions;
            self.dirty = true;
        }
    }

    pub(crate) fn patch_form(&mut self, errors: Vec<String>, success: String) {
        let next = FormFeedback { errors, success };
        if self.form != next {
            self.form = next;
            self.dirty = true;
        }
    }
}
