use crate::{LoadState, NotificationKind, PreviewRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load_state: LoadState,
    /// The visible subset, in display order.
    pub records: Vec<PreviewRecord>,
    /// Size of the authoritative collection.
    pub total_count: usize,
    pub search_text: String,
    pub pending_url: String,
    /// The URL input and Add action are disabled while true.
    pub is_submitting: bool,
    pub notification: Option<NotificationView>,
    pub dirty: bool,
}
