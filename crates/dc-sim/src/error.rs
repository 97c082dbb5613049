use dc_mobility::MobilityError;
use dc_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("simulator error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("session has been disposed")]
    Disposed,

    #[error("delivery did not arrive within {limit_ms} ms")]
    Timeout { limit_ms: u64 },

    #[error("order manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
