#![forbid(unsafe_code)]

//! Construction and host-boundary errors.
//!
//! Interaction handlers never fail: field validation produces values and
//! missing targets are no-ops. Only configuration, element binding, and
//! decoding of host-encoded input can return a [`FolioError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("malformed encoded input: {message}")]
    EncodedInput { message: String },

    #[error("required element not found: {selector}")]
    UnboundElement { selector: String },
}

impl FolioError {
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn encoded_input(message: impl Into<String>) -> Self {
        Self::EncodedInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unbound(selector: impl Into<String>) -> Self {
        Self::UnboundElement {
            selector: selector.into(),
        }
    }
}
