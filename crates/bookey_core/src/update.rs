use crate::{
    AppState, Effect, Msg, NotificationKind, NOTIFICATION_TTL, SUBMIT_FAILURE_MESSAGE,
    SUBMIT_SUCCESS_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_load() {
                vec![Effect::LoadPreviews]
            } else {
                Vec::new()
            }
        }
        Msg::PreviewsLoaded(Ok(records)) => {
            state.apply_loaded(records);
            Vec::new()
        }
        Msg::PreviewsLoaded(Err(_failure)) => {
            // Initial load failures are not surfaced; the list stays empty.
            state.apply_load_failed();
            Vec::new()
        }
        Msg::SearchChanged(text) => {
            state.set_search_text(text);
            Vec::new()
        }
        Msg::UrlInputChanged(url) => {
            state.set_pending_url(url);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            if state.submission().is_submitting {
                return (state, Vec::new());
            }
            let Some(url) = submittable_url(&state.submission().pending_url) else {
                return (state, Vec::new());
            };
            state.begin_submission();
            vec![Effect::CreatePreview { url }]
        }
        Msg::PreviewCreated(result) => {
            if !state.submission().is_submitting {
                // Nothing is in flight; a late or duplicate answer is ignored.
                return (state, Vec::new());
            }
            match result {
                Ok(record) if record.is_well_formed() => {
                    state.finish_submission(Some(record));
                    vec![raise(
                        &mut state,
                        SUBMIT_SUCCESS_MESSAGE,
                        NotificationKind::Success,
                    )]
                }
                Ok(_) | Err(_) => {
                    state.finish_submission(None);
                    vec![raise(&mut state, SUBMIT_FAILURE_MESSAGE, NotificationKind::Error)]
                }
            }
        }
        Msg::NotificationExpired { ticket } => {
            state.expire_notification(ticket);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn raise(state: &mut AppState, message: &str, kind: NotificationKind) -> Effect {
    let ticket = state.raise_notification(message, kind);
    Effect::ScheduleNotificationExpiry {
        ticket,
        after: NOTIFICATION_TTL,
    }
}

/// Trimmed URL if it is non-empty and parses as an absolute URL.
fn submittable_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    url::Url::parse(trimmed).ok()?;
    Some(trimmed.to_string())
}
