//! Error handling and custom error types
//!
//! Provides unified error handling across the client using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource resolution error: {0}")]
    Resolution(String),

    #[error("Payload too large: {size} bytes (limit {limit} bytes)")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Remote service error (ret {ret}): {msg}")]
    Remote { ret: i64, msg: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True for failures raised while turning a resource reference into a payload.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Error::Resolution(_) | Error::PayloadTooLarge { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
