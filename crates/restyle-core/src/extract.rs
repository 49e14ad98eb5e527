//! Response extractor: recover one canonical image from whichever reply
//! shape this model version produced.
//!
//! The shapes are tried as an ordered table of named pure extractors over
//! the decoded message. The first strategy that yields a non-empty image
//! wins; later ones are never attempted. Adding support for a new reply
//! shape means appending an entry, not editing existing logic.

use restyle_types::protocol::reply::{ModelReply, ReplyContent, ReplyMessage};
use restyle_types::TryOnError;

use crate::classify::{truncate, MAX_DEBUG_LEN};

/// Minimum length for a bare string to be considered base64 image bytes.
/// Real single-image payloads run to hundreds of kilobytes; the floor
/// rejects short prose that happens to stay inside the base64 alphabet.
const MIN_BASE64_LEN: usize = 256;

type Strategy = fn(&ReplyMessage) -> Option<String>;

/// Candidate shapes in priority order. First non-empty hit wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("content_parts", from_content_parts),
    ("content_array", from_content_array),
    ("content_string", from_content_string),
];

/// Find the generated image in a decoded reply.
///
/// Deterministic and idempotent: the same reply always yields the same
/// canonical result. No match is a reported failure, not a crash - the
/// model's free-text output travels along as a truncated debug hint.
pub fn extract_image(reply: &ModelReply) -> Result<String, TryOnError> {
    let Some(message) = reply.message() else {
        return Err(TryOnError::NoImage { debug: None });
    };

    for (name, strategy) in STRATEGIES {
        if let Some(image) = strategy(message) {
            if !image.is_empty() {
                tracing::debug!("extracted image via {} strategy", name);
                return Ok(image);
            }
        }
    }

    Err(TryOnError::NoImage { debug: debug_hint(message) })
}

/// Gemini-native `content_parts`: inline bytes with an explicit MIME type,
/// or a part whose discriminator marks it as an image with raw data.
fn from_content_parts(message: &ReplyMessage) -> Option<String> {
    let parts = message.content_parts.as_ref()?;
    for part in parts {
        if let Some(inline) = &part.inline_data {
            if !inline.data.is_empty() {
                let mime_type = inline.mime_type.as_deref().unwrap_or("image/png");
                return Some(format!("data:{};base64,{}", mime_type, inline.data));
            }
        }
        if part.kind.as_deref() == Some("image") {
            if let Some(data) = part.data.as_deref().filter(|d| !d.is_empty()) {
                return Some(format!("data:image/png;base64,{}", data));
            }
        }
    }
    None
}

/// OpenAI-style array `content`: an `image_url` entry is used verbatim; an
/// inline `image` entry is wrapped as a PNG data URI.
fn from_content_array(message: &ReplyMessage) -> Option<String> {
    let items = match message.content.as_ref()? {
        ReplyContent::Items(items) => items,
        ReplyContent::Text(_) => return None,
    };
    for item in items {
        if item.kind.as_deref() == Some("image_url") {
            if let Some(image_url) = &item.image_url {
                let url = image_url.url();
                if !url.is_empty() {
                    return Some(url.to_string());
                }
            }
        }
        if item.kind.as_deref() == Some("image") {
            if let Some(data) = item.data.as_deref().filter(|d| !d.is_empty()) {
                return Some(format!("data:image/png;base64,{}", data));
            }
        }
    }
    None
}

/// String `content`: a data URI passes through as-is; a long base64-only
/// string (whitespace tolerated) is wrapped as a PNG data URI. Anything
/// short or outside the base64 alphabet is not image data.
fn from_content_string(message: &ReplyMessage) -> Option<String> {
    let text = message.content.as_ref()?.as_text()?;
    if text.starts_with("data:image") {
        return Some(text.to_string());
    }

    let cleaned: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if cleaned.len() >= MIN_BASE64_LEN && is_base64_alphabet(&cleaned) {
        return Some(format!("data:image/png;base64,{}", cleaned));
    }
    None
}

fn is_base64_alphabet(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
}

/// Whatever free text the model produced, truncated, for the debug field.
fn debug_hint(message: &ReplyMessage) -> Option<String> {
    let text = message
        .reasoning
        .as_deref()
        .or_else(|| message.content.as_ref().and_then(ReplyContent::as_text))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(truncate(trimmed, MAX_DEBUG_LEN))
    }
}
