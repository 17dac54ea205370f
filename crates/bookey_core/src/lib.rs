//! Bookey core: pure state machine for the link collection, search filter,
//! submission workflow and notification channel.
mod effect;
pub mod filter;
mod msg;
mod notification;
mod record;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{LoadFailure, Msg, SubmissionFailure};
pub use notification::{
    Notification, NotificationChannel, NotificationKind, NotificationTicket, NOTIFICATION_TTL,
    SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
pub use record::PreviewRecord;
pub use state::{AppState, SubmissionState};
pub use store::{DataStore, LoadState};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView};
