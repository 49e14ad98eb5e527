//! # Restyle Core
//!
//! The try-on engine: everything between the inbound request and the
//! canonical result.
//!
//! ```text
//! restyle-core/src/
//! ├── styles.rs       # fixed style-id → clothing-description catalog
//! ├── prompt.rs       # instruction text + ordered image attachments
//! ├── assemble.rs     # chat-completion request shaping
//! ├── upstream.rs     # single-flight HTTP call to the generation endpoint
//! ├── classify.rs     # non-2xx / body → stable error taxonomy
//! ├── extract.rs      # reply → canonical image (priority-ordered strategies)
//! └── orchestrator.rs # glue: validate → build → call → extract
//! ```
//!
//! Each orchestration is stateless and makes exactly one upstream call.

pub mod assemble;
pub mod classify;
pub mod extract;
pub mod orchestrator;
pub mod prompt;
pub mod styles;
pub mod upstream;


pub use orchestrator::run_try_on;
pub use upstream::UpstreamClient;
