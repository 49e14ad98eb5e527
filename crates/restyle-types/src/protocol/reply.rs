//! Lenient types for the upstream model's reply.
//!
//! The endpoint has shipped at least three distinct ways of returning a
//! generated image: a Gemini-native `content_parts` array with inline bytes,
//! an OpenAI-style `content` array with `image_url`/`image` entries, and a
//! bare string `content` that is either a data URI or raw base64. Every
//! field here is optional so that any of those shapes decodes without error;
//! picking the image out of the decoded value is the extractor's job.

use serde::{Deserialize, Serialize};

/// Top-level reply from the chat-completion endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ModelReply {
    #[serde(default)]
    pub choices: Vec<ReplyChoice>,
}

impl ModelReply {
    /// The message of the first choice, when present.
    pub fn message(&self) -> Option<&ReplyMessage> {
        self.choices.first().map(|c| &c.message)
    }
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplyChoice {
    #[serde(default)]
    pub message: ReplyMessage,
}

/// The assistant message, in whichever shape this model version emits.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<ReplyContent>,
    /// Gemini-native part list, present on some model versions.
    #[serde(default)]
    pub content_parts: Option<Vec<ReplyPart>>,
    /// Free-text reasoning some versions attach alongside the image.
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// `content` is either a plain string or an array of typed items.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReplyContent {
    Text(String),
    Items(Vec<ReplyContentItem>),
}

impl ReplyContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Items(_) => None,
        }
    }
}

/// One entry of an array-valued `content`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReplyContentItem {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub image_url: Option<ImageUrlRef>,
    /// Inline base64 bytes on `type: "image"` entries.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// An image URL that arrives either bare or wrapped in an object.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ImageUrlRef {
    Url(String),
    Object { url: String },
}

impl ImageUrlRef {
    pub fn url(&self) -> &str {
        match self {
            Self::Url(url) | Self::Object { url } => url,
        }
    }
}

/// One entry of a Gemini-native `content_parts` array.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReplyPart {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    /// Raw base64 bytes on `type: "image"` entries.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Inline image payload: base64 bytes plus an optional MIME type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}
