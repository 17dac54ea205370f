use crate::view_model::{AppViewModel, NotificationView};
use crate::{DataStore, LoadState, NotificationChannel, NotificationKind, NotificationTicket, PreviewRecord};

/// Pending URL input and the single in-flight submission slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub pending_url: String,
    pub is_submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    store: DataStore,
    search_text: String,
    submission: SubmissionState,
    notification: NotificationChannel,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            load_state: self.store.load_state(),
            records: self.store.visible().to_vec(),
            total_count: self.store.records().len(),
            search_text: self.search_text.clone(),
            pending_url: self.submission.pending_url.clone(),
            is_submitting: self.submission.is_submitting,
            notification: self.notification.current().map(|n| NotificationView {
                message: n.message.clone(),
                kind: n.kind,
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn records(&self) -> &[PreviewRecord] {
        self.store.records()
    }

    pub fn visible(&self) -> &[PreviewRecord] {
        self.store.visible()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn notification(&self) -> &NotificationChannel {
        &self.notification
    }

    /// True while the initial load or a submission awaits the service.
    pub fn has_request_in_flight(&self) -> bool {
        self.submission.is_submitting || self.store.load_state() == LoadState::Loading
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_load(&mut self) -> bool {
        let started = self.store.begin_load();
        if started {
            self.mark_dirty();
        }
        started
    }

    pub(crate) fn apply_loaded(&mut self, records: Vec<PreviewRecord>) {
        self.store.load(records, &self.search_text);
        self.mark_dirty();
    }

    pub(crate) fn apply_load_failed(&mut self) {
        self.store.load_failed();
        self.mark_dirty();
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        if self.search_text == text {
            return;
        }
        self.search_text = text;
        self.store.refilter(&self.search_text);
        self.mark_dirty();
    }

    /// Ignored while a submission is in flight; the input is disabled then.
    pub(crate) fn set_pending_url(&mut self, url: String) {
        if self.submission.is_submitting || self.submission.pending_url == url {
            return;
        }
        self.submission.pending_url = url;
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) {
        self.submission.is_submitting = true;
        self.mark_dirty();
    }

    pub(crate) fn finish_submission(&mut self, created: Option<PreviewRecord>) {
        if let Some(record) = created {
            self.store.prepend(record, &self.search_text);
            self.submission.pending_url.clear();
        }
        self.submission.is_submitting = false;
        self.mark_dirty();
    }

    pub(crate) fn raise_notification(
        &mut self,
        message: &str,
        kind: NotificationKind,
    ) -> NotificationTicket {
        self.mark_dirty();
        self.notification.raise(message, kind)
    }

    pub(crate) fn expire_notification(&mut self, ticket: NotificationTicket) {
        if self.notification.expire(ticket) {
            self.mark_dirty();
        }
    }
}
