//! Codex app: wires the common store to the API and hosts the CLI plumbing.
pub mod config;
pub mod logging;
pub mod mapping;
pub mod store;

pub use config::{AppConfig, ConfigError, CONFIG_FILENAME};
pub use logging::LogDestination;
pub use store::CommonStore;

/// Version string of this build, overridable at compile time with `CODEX_PACKAGE_VERSION`.
pub const INSTALLED_VERSION: &str = match option_env!("CODEX_PACKAGE_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
