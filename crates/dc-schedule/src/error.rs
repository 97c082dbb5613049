use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("repeating task interval must be greater than zero")]
    ZeroInterval,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
