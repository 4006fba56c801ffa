use codex_logging::{codex_debug, codex_error};

use crate::{normalize_errors, CommonState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every form patch replaces both feedback fields in one step, so a reader never
/// sees errors and a success message at the same time.
pub fn update(mut state: CommonState, msg: Msg) -> (CommonState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadVersions => vec![Effect::FetchVersions {
            timestamp: state.timestamp(),
        }],
        Msg::VersionsLoaded(Ok(versions)) => {
            codex_debug!(
                "Versions loaded installed={:?} latest={:?}",
                versions.installed,
                versions.latest
            );
            state.replace_versions(versions);
            Vec::new()
        }
        Msg::VersionsLoaded(Err(reason)) => {
            codex_error!("Loading versions failed: {}", reason);
            Vec::new()
        }
        Msg::DownloadRequested { href, file_name } => vec![Effect::Download { href, file_name }],
        Msg::ErrorsReported(error) => {
            state.patch_form(normalize_errors(&error), String::new());
            Vec::new()
        }
        Msg::SuccessReported(success) => {
            state.patch_form(Vec::new(), success);
            Vec::new()
        }
        Msg::FeedbackCleared => {
            state.patch_form(Vec::new(), String::new());
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
