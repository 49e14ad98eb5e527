//! Orchestrator: validate → build prompt → assemble → call once → extract.
//!
//! Each invocation is an independent, stateless unit of work making at most
//! one upstream call. Failures short-circuit with `?` - validation failures
//! before any network cost, everything else classified at the stage it
//! occurred. No partial results: the outcome is an image or a typed error.

use restyle_types::{TryOnError, TryOnRequest, TryOnSuccess};

use crate::assemble::build_chat_request;
use crate::extract::extract_image;
use crate::prompt::build_prompt;
use crate::upstream::UpstreamClient;

/// Run one try-on call end to end.
///
/// Cancellation propagates by drop: abandoning the returned future aborts
/// the in-flight upstream request.
pub async fn run_try_on(
    upstream: &UpstreamClient,
    request: &TryOnRequest,
) -> Result<TryOnSuccess, TryOnError> {
    let trace_id = uuid::Uuid::new_v4();

    let mode = request.mode()?;
    tracing::info!("[{}] try-on request, mode: {:?}", trace_id, mode.style_echo());

    let plan = build_prompt(&mode, &request.image);
    let chat_request = build_chat_request(&plan);

    let reply = upstream.call(&chat_request).await.inspect_err(|e| {
        tracing::error!("[{}] upstream call failed: {}", trace_id, e);
    })?;

    let image = extract_image(&reply).inspect_err(|e| {
        tracing::error!("[{}] no image in reply: {}", trace_id, e);
    })?;

    tracing::info!("[{}] try-on completed", trace_id);
    Ok(TryOnSuccess { image, style: mode.style_echo().map(str::to_string) })
}
