use std::time::Duration;

use chrono::Utc;
use codex_api::{ApiEvent, ApiHandle};
use codex_core::{update, CommonState, CommonView, Effect, Msg, RequestTimestamp, TransportError};
use codex_logging::{codex_debug, codex_info};
use tokio::sync::watch;

use crate::mapping::{to_transport_error, versions_loaded};

/// Session-scoped common state: form feedback and version info.
///
/// Every action goes through [`codex_core::update`]; each change is published
/// once to subscribers. API results are applied when the owner pumps events.
pub struct CommonStore {
    state: CommonState,
    api: ApiHandle,
    changes: watch::Sender<CommonView>,
}

impl CommonStore {
    /// Store for this build, stamped with the current time.
    pub fn new(api: ApiHandle) -> Self {
        Self::with_state(api, CommonState::new(crate::INSTALLED_VERSION, now_timestamp()))
    }

    pub fn with_state(api: ApiHandle, state: CommonState) -> Self {
        let (changes, _) = watch::channel(state.view());
        Self {
            state,
            api,
            changes,
        }
    }

    pub fn state(&self) -> &CommonState {
        &self.state
    }

    pub fn view(&self) -> CommonView {
        self.state.view()
    }

    pub fn subscribe(&self) -> watch::Receiver<CommonView> {
        self.changes.subscribe()
    }

    /// Ask the server for version info; the result lands on a later pump.
    pub fn load_versions(&mut self) {
        self.dispatch(Msg::LoadVersions);
    }

    /// Fire-and-forget; failures are only logged.
    pub fn trigger_download(&mut self, href: impl Into<String>, file_name: impl Into<String>) {
        self.dispatch(Msg::DownloadRequested {
            href: href.into(),
            file_name: file_name.into(),
        });
    }

    pub fn report_errors(&mut self, error: TransportError) {
        self.dispatch(Msg::ErrorsReported(error));
    }

    pub fn report_api_error(&mut self, error: codex_api::ApiError) {
        self.report_errors(to_transport_error(error));
    }

    pub fn report_success(&mut self, message: impl Into<String>) {
        self.dispatch(Msg::SuccessReported(message.into()));
    }

    pub fn clear_feedback(&mut self) {
        self.dispatch(Msg::FeedbackCleared);
    }

    /// Apply every API result that has arrived. Returns how many were applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.api.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Block for at most `timeout` waiting for one API result.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.api.recv_timeout(timeout) {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// Waits for in-flight requests, including downloads, then stops the worker.
    pub fn shutdown(self) {
        self.api.shutdown();
    }

    fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::VersionsFetched { timestamp, result } => {
                codex_debug!("Version answer for ts={} ok={}", timestamp, result.is_ok());
                self.dispatch(versions_loaded(result));
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;

        if self.state.consume_dirty() {
            self.changes.send_replace(self.state.view());
        }
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchVersions { timestamp } => {
                    self.api.fetch_versions(timestamp.as_millis());
                }
                Effect::Download { href, file_name } => {
                    codex_info!("Download href={} file_name={}", href, file_name);
                    self.api.download(href, file_name);
                }
            }
        }
    }
}

fn now_timestamp() -> RequestTimestamp {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    RequestTimestamp::from_millis(millis)
}
