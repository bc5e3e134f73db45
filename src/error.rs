//! Errors returned by the fulfillment layer
//!
//! The narration core itself never fails; these cover the envelope, config
//! and I/O around it.

use thiserror::Error;

/// Message sent back when a body is neither a v1 nor a v2 webhook request
pub const INVALID_WEBHOOK_MESSAGE: &str =
    "Invalid Webhook Request (expecting v1 or v2 webhook request)";

#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl FulfillmentError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's request rather than by us
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::Json(_))
    }
}
