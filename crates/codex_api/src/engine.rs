use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use codex_logging::{codex_debug, codex_error};
use tokio_util::task::TaskTracker;

use crate::{ApiEvent, CommonApi};

enum ApiCommand {
    FetchVersions { timestamp: u64 },
    Download { href: String, file_name: String },
}

/// Runs API calls on a background runtime. Commands are fire-and-forget;
/// version results come back as [`ApiEvent`]s.
pub struct ApiHandle {
    cmd_tx: Option<mpsc::Sender<ApiCommand>>,
    event_rx: mpsc::Receiver<ApiEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ApiHandle {
    pub fn new(api: CommonApi) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(api);

        let worker = thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    codex_error!("Failed to start API runtime: {}", err);
                    return;
                }
            };
            let tracker = TaskTracker::new();
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                tracker.spawn_on(
                    async move {
                        handle_command(api.as_ref(), command, event_tx).await;
                    },
                    runtime.handle(),
                );
            }
            // Sender gone: let in-flight requests finish.
            tracker.close();
            runtime.block_on(tracker.wait());
        });

        Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
            worker: Some(worker),
        }
    }

    /// Stop accepting commands and block until every in-flight request has finished.
    pub fn shutdown(mut self) {
        self.cmd_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                codex_error!("API worker panicked");
            }
        }
    }

    pub fn fetch_versions(&self, timestamp: u64) {
        self.send(ApiCommand::FetchVersions { timestamp });
    }

    pub fn download(&self, href: impl Into<String>, file_name: impl Into<String>) {
        self.send(ApiCommand::Download {
            href: href.into(),
            file_name: file_name.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<ApiEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: ApiCommand) {
        if let Some(tx) = &self.cmd_tx {
            if tx.send(command).is_err() {
                codex_error!("API worker is not running; command dropped");
            }
        }
    }
}

async fn handle_command(api: &CommonApi, command: ApiCommand, event_tx: mpsc::Sender<ApiEvent>) {
    match command {
        ApiCommand::FetchVersions { timestamp } => {
            let result = api.fetch_versions(timestamp).await;
            let _ = event_tx.send(ApiEvent::VersionsFetched { timestamp, result });
        }
        ApiCommand::Download { href, file_name } => {
            codex_debug!("Download requested href={} file_name={}", href, file_name);
            api.download_with_platform_fix(&href, &file_name).await;
        }
    }
}
