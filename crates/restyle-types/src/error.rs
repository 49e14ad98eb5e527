//! The stable error taxonomy for try-on calls.
//!
//! Every failure a caller can observe maps onto exactly one variant here.
//! The `Display` text is the user-facing headline; low-level diagnostic
//! detail (raw upstream bodies, model reasoning) only ever travels in the
//! optional `debug` field and is truncated before it gets there.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a try-on orchestration.
///
/// All variants are terminal for the call: this layer never retries.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "details")]
pub enum TryOnError {
    /// Required input missing or malformed; detected before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// Upstream returned 429.
    #[error("Too many requests, please try again in a moment")]
    RateLimited,

    /// Upstream returned 402.
    #[error("The image service quota is exhausted")]
    QuotaExhausted,

    /// Upstream returned some other non-2xx status.
    #[error("{message}")]
    Upstream { message: String },

    /// The reply decoded fine but carried no image in any known shape.
    #[error("The model did not produce an image, try again or use a different photo")]
    NoImage { debug: Option<String> },

    /// Transport failure, undecodable 2xx body, or any other unexpected error.
    #[error("Try-on failed: {message}")]
    Internal { message: String },
}

impl TryOnError {
    /// HTTP status code this error maps to in the caller-facing response.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::RateLimited => 429,
            Self::QuotaExhausted => 402,
            Self::Upstream { .. } | Self::NoImage { .. } | Self::Internal { .. } => 500,
        }
    }

    /// Secondary diagnostic detail, if any. Never part of the headline.
    pub fn debug_hint(&self) -> Option<&str> {
        match self {
            Self::NoImage { debug } => debug.as_deref(),
            _ => None,
        }
    }

    /// Whether the failure was detected before any upstream cost was incurred.
    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for try-on operations.
pub type TryOnResult<T> = Result<T, TryOnError>;
