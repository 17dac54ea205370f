use std::time::Duration;

use bookey_core::{Effect, LoadFailure, Msg, PreviewRecord, SubmissionFailure};
use bookey_engine::{EngineEvent, EngineHandle, PreviewPayload};
use bookey_logging::{bookey_info, bookey_warn};

/// Hands core effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPreviews => {
                    bookey_info!("LoadPreviews");
                    self.engine.load_previews();
                }
                Effect::CreatePreview { url } => {
                    bookey_info!("CreatePreview url_len={} url={}", url.len(), url);
                    self.engine.create_preview(url);
                }
                Effect::ScheduleNotificationExpiry { ticket, after } => {
                    self.engine.schedule_timer(ticket, after);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn wait_message(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }

    /// Drains every event the engine has ready.
    pub fn poll_messages(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PreviewsLoaded(Ok(payloads)) => {
            let received = payloads.len();
            let records: Vec<PreviewRecord> = payloads.into_iter().map(map_payload).collect();
            let malformed = records.iter().filter(|r| !r.is_well_formed()).count();
            if malformed > 0 {
                bookey_warn!("Dropping {} previews without url or domain", malformed);
            }
            bookey_info!("Loaded {} previews", received - malformed);
            Msg::PreviewsLoaded(Ok(records))
        }
        EngineEvent::PreviewsLoaded(Err(err)) => {
            bookey_warn!("Error fetching saved previews: {}", err);
            Msg::PreviewsLoaded(Err(LoadFailure::new(err.to_string())))
        }
        EngineEvent::PreviewCreated {
            url,
            result: Ok(payload),
        } => {
            let record = map_payload(payload);
            if record.is_well_formed() {
                bookey_info!("Created preview for {}", url);
            } else {
                bookey_warn!("Service returned a preview without url or domain for {}", url);
            }
            Msg::PreviewCreated(Ok(record))
        }
        EngineEvent::PreviewCreated {
            url,
            result: Err(err),
        } => {
            bookey_warn!("Failed to create preview for {}: {}", url, err);
            Msg::PreviewCreated(Err(SubmissionFailure::new(err.to_string())))
        }
        EngineEvent::TimerElapsed { ticket } => Msg::NotificationExpired { ticket },
    }
}

fn map_payload(payload: PreviewPayload) -> PreviewRecord {
    PreviewRecord {
        url: payload.url,
        title: payload.title,
        description: payload.description,
        domain: payload.domain,
        img: payload.img.filter(|img| !img.is_empty()),
        favicon: payload.favicon.filter(|favicon| !favicon.is_empty()),
        tags: payload.tags,
    }
}
