//! Protocol definitions for the upstream generation endpoint.
//!
//! - `chat` - the outbound multimodal chat-completion request shape
//! - `reply` - lenient types for the upstream reply, which varies across
//!   model versions (see [`reply::ReplyMessage`])

pub mod chat;
pub mod reply;

pub use chat::ChatRole;
