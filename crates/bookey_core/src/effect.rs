use std::time::Duration;

use crate::NotificationTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the saved previews from the service.
    LoadPreviews,
    /// Ask the service to build a preview for `url`.
    CreatePreview { url: String },
    /// Report `Msg::NotificationExpired { ticket }` once `after` has elapsed.
    ScheduleNotificationExpiry {
        ticket: NotificationTicket,
        after: Duration,
    },
}
