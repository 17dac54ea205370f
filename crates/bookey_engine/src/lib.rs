//! Bookey engine: preview service client and effect execution.
mod engine;
mod service;
mod types;

pub use engine::EngineHandle;
pub use service::{PreviewService, ReqwestPreviewService, ServiceSettings, DEFAULT_BASE_URL};
pub use types::{
    CreatePreviewRequest, EngineEvent, FailureKind, PreviewPayload, ServiceError, TimerTicket,
};
