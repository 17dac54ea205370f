use std::time::Duration;

/// How long a notification stays visible unless replaced.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Link added successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to add link. Please try again.";

/// Identifies the expiry timer started for one `raise`.
pub type NotificationTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub ticket: NotificationTicket,
}

/// Single-slot notification with preempt-and-restart expiry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationChannel {
    current: Option<Notification>,
    last_ticket: NotificationTicket,
}

impl NotificationChannel {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces whatever is showing. The returned ticket must be handed to the
    /// timer; only that ticket can hide this notification.
    pub(crate) fn raise(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationTicket {
        self.last_ticket += 1;
        self.current = Some(Notification {
            message: message.into(),
            kind,
            ticket: self.last_ticket,
        });
        self.last_ticket
    }

    /// Returns true if the notification was hidden.
    pub(crate) fn expire(&mut self, ticket: NotificationTicket) -> bool {
        match &self.current {
            Some(current) if current.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
