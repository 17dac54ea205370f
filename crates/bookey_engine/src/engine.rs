use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use bookey_logging::{bookey_debug, bookey_trace};
use tokio::task::AbortHandle;

use crate::service::PreviewService;
use crate::{EngineEvent, TimerTicket};

enum EngineCommand {
    LoadPreviews,
    CreatePreview { url: String },
    ScheduleTimer { ticket: TimerTicket, after: Duration },
}

/// Runs service calls and timers on a tokio runtime owned by a worker thread.
///
/// Results come back as [`EngineEvent`]s. The worker stops once the handle is
/// dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(service: Arc<dyn PreviewService>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("bookey-engine")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("bookey-engine-commands".to_string())
            .spawn(move || {
                // Only the newest timer may fire; scheduling another aborts it.
                let mut active_timer: Option<AbortHandle> = None;
                while let Ok(command) = cmd_rx.recv() {
                    let event_tx = event_tx.clone();
                    match command {
                        EngineCommand::LoadPreviews => {
                            let service = service.clone();
                            runtime.spawn(async move {
                                let result = service.list_previews().await;
                                let _ = event_tx.send(EngineEvent::PreviewsLoaded(result));
                            });
                        }
                        EngineCommand::CreatePreview { url } => {
                            let service = service.clone();
                            runtime.spawn(async move {
                                let result = service.create_preview(&url).await;
                                let _ = event_tx.send(EngineEvent::PreviewCreated { url, result });
                            });
                        }
                        EngineCommand::ScheduleTimer { ticket, after } => {
                            if let Some(previous) = active_timer.take() {
                                bookey_trace!("Superseding previous timer");
                                previous.abort();
                            }
                            let task = runtime.spawn(async move {
                                tokio::time::sleep(after).await;
                                let _ = event_tx.send(EngineEvent::TimerElapsed { ticket });
                            });
                            active_timer = Some(task.abort_handle());
                        }
                    }
                }
                bookey_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load_previews(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadPreviews);
    }

    pub fn create_preview(&self, url: impl Into<String>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::CreatePreview { url: url.into() });
    }

    /// Reports `TimerElapsed { ticket }` after `after`, unless another timer is
    /// scheduled first.
    pub fn schedule_timer(&self, ticket: TimerTicket, after: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleTimer { ticket, after });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
