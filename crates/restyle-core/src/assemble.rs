//! Request assembler: shapes a [`PromptPlan`] into the chat-completion body.
//!
//! Pure data shaping - cannot fail given valid inputs.

use restyle_types::protocol::chat::{
    ChatCompletionRequest, ChatMessage, ChatRole, ImageUrl, RequestPart,
};

use crate::prompt::PromptPlan;

/// Model identifier the gateway generates with.
pub const MODEL: &str = "google/gemini-3-pro-image-preview";
/// Sampling temperature for generation.
pub const TEMPERATURE: f32 = 0.8;
/// Output size cap.
pub const MAX_TOKENS: u32 = 8192;

/// Build the outbound request: one user turn, text part first, then one
/// image part per attachment in the order the plan supplied them.
pub fn build_chat_request(plan: &PromptPlan) -> ChatCompletionRequest {
    let mut content = Vec::with_capacity(1 + plan.images.len());
    content.push(RequestPart::Text { text: plan.instruction.clone() });
    for image in &plan.images {
        content.push(RequestPart::ImageUrl { image_url: ImageUrl { url: image.clone() } });
    }

    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![ChatMessage { role: ChatRole::User, content }],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        modalities: vec!["image".to_string(), "text".to_string()],
    }
}
