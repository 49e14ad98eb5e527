//! # Restyle Types
//!
//! Wire types, domain models, and error definitions for the Restyle try-on
//! gateway.
//!
//! - **`error`** - The stable error taxonomy returned to callers
//! - **`protocol`** - Chat-completion request/reply types for the upstream model
//! - **`tryon`** - Inbound contract and mode resolution
//!
//! All types are designed to be:
//! - **Serializable** via serde for API payloads
//! - **Clone** for cheap sharing across async boundaries
//! - **Matchable** for error handling via enum variants

pub mod error;
pub mod protocol;
pub mod tryon;

pub use error::{TryOnError, TryOnResult};
pub use tryon::{TryOnMode, TryOnRequest, TryOnSuccess};
