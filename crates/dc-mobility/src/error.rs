use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("invalid simulator configuration: {0}")]
    Config(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
