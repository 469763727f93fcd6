use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Service error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("store request failed: {0}")]
    Store(#[from] redis::RedisError),

    #[error("push delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("malformed notification payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid notification: {0}")]
    InvalidNotification(String),
}
