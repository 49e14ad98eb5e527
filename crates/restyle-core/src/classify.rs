//! Error classifier: non-2xx upstream responses → the stable taxonomy.

use restyle_types::TryOnError;
use serde_json::Value;

/// Cap on diagnostic detail surfaced to callers.
pub const MAX_DEBUG_LEN: usize = 200;

const DEFAULT_UPSTREAM_MESSAGE: &str = "The image service is temporarily unavailable";

/// Classify a non-2xx upstream status.
///
/// 429 and 402 classify on status alone - the body is never read for them
/// (the upstream client only fetches it for other statuses). Everything else
/// becomes [`TryOnError::Upstream`] carrying the most specific message the
/// body yields.
pub fn classify_upstream_status(status: u16, body: &str) -> TryOnError {
    match status {
        429 => TryOnError::RateLimited,
        402 => TryOnError::QuotaExhausted,
        _ => TryOnError::Upstream { message: upstream_message(body) },
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// Prefers the nested JSON `error.message`, then a top-level `message`,
/// then the truncated raw body, then a fixed default.
fn upstream_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let nested = json
            .get("error")
            .and_then(|e| e.get("message"))
            .or_else(|| json.get("message"))
            .and_then(|m| m.as_str());
        if let Some(message) = nested {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        DEFAULT_UPSTREAM_MESSAGE.to_string()
    } else {
        truncate(trimmed, MAX_DEBUG_LEN)
    }
}

/// Char-boundary-safe prefix of at most `max` characters.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_429_maps_to_rate_limited() {
        // Body deliberately garbage: 429 must classify without parsing it
        assert_eq!(classify_upstream_status(429, "{not json"), TryOnError::RateLimited);
    }

    #[test]
    fn test_402_maps_to_quota_exhausted() {
        assert_eq!(classify_upstream_status(402, ""), TryOnError::QuotaExhausted);
    }

    #[test]
    fn test_nested_error_message_surfaced() {
        let body = r#"{"error":{"message":"model overloaded","code":503}}"#;
        match classify_upstream_status(503, body) {
            TryOnError::Upstream { message } => assert_eq!(message, "model overloaded"),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_message_surfaced() {
        let body = r#"{"message":"bad gateway"}"#;
        match classify_upstream_status(500, body) {
            TryOnError::Upstream { message } => assert_eq!(message, "bad gateway"),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_body_truncated() {
        let body = "x".repeat(500);
        match classify_upstream_status(500, &body) {
            TryOnError::Upstream { message } => {
                assert_eq!(message.len(), MAX_DEBUG_LEN);
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_uses_default_message() {
        match classify_upstream_status(500, "") {
            TryOnError::Upstream { message } => {
                assert_eq!(message, DEFAULT_UPSTREAM_MESSAGE);
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "héllo".repeat(100);
        let cut = truncate(&text, 7);
        assert_eq!(cut, "héllohé");
    }
}
