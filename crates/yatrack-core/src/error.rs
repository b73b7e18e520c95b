use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("network error: {0}")]
    Network(String),
}

pub type TrackResult<T> = Result<T, TrackError>;
