use crate::is_newer_version;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommonView {
    pub errors: Vec<String>,
    pub success: String,
    pub installed: Option<String>,
    pub latest: Option<String>,
}

impl CommonView {
    /// True when the server reports a strictly newer release than the one installed.
    pub fn update_available(&self) -> bool {
        match (self.latest.as_deref(), self.installed.as_deref()) {
            (Some(latest), Some(installed)) => is_newer_version(latest, installed),
            _ => false,
        }
    }

    pub fn has_feedback(&self) -> bool {
        !self.errors.is_empty() || !self.success.is_empty()
    }
}
