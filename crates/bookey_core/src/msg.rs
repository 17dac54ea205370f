use std::fmt;

use crate::{NotificationTicket, PreviewRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished starting; triggers the one-time load.
    Started,
    /// Service answered the initial load.
    PreviewsLoaded(Result<Vec<PreviewRecord>, LoadFailure>),
    /// User edited the search box.
    SearchChanged(String),
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// User submitted the current URL input.
    UrlSubmitted,
    /// Service answered a submission.
    PreviewCreated(Result<PreviewRecord, SubmissionFailure>),
    /// A notification expiry timer fired.
    NotificationExpired { ticket: NotificationTicket },
    /// UI/render tick to coalesce rendering.
    Tick,
}

/// The initial fetch failed. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub reason: String,
}

/// Creating a preview failed. Shown as a generic error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub reason: String,
}

impl LoadFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load failed: {}", self.reason)
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.reason)
    }
}
