//! Fixed style catalog.
//!
//! Immutable configuration data, initialized once. An unknown style id is
//! never an error - lookup misses degrade to the caller-supplied custom
//! prompt, then to [`GENERIC_DESCRIPTION`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Fallback clothing description when neither the catalog nor a custom
/// prompt provides one.
pub const GENERIC_DESCRIPTION: &str = "fashionable modern clothing";

static STYLE_DESCRIPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "business",
            "premium business formalwear: a dark tailored suit, white shirt and tie",
        ),
        (
            "casual",
            "fashionable casual wear: jeans with a simple t-shirt or relaxed shirt",
        ),
        (
            "street",
            "trendy streetwear: an oversized hoodie, sneakers and a baseball cap",
        ),
        ("elegant", "an elegant evening gown, ornate and formal"),
        ("sporty", "athletic sportswear: a training outfit with running shoes"),
        ("vintage", "vintage-style clothing with nostalgic classic cuts"),
    ])
});

/// Look up the canned description for a style id.
pub fn style_description(style_id: &str) -> Option<&'static str> {
    STYLE_DESCRIPTIONS.get(style_id).copied()
}

/// The known style ids, for diagnostics.
pub fn known_styles() -> impl Iterator<Item = &'static str> {
    STYLE_DESCRIPTIONS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_styles() {
        assert_eq!(known_styles().count(), 6);
        for id in ["business", "casual", "street", "elegant", "sporty", "vintage"] {
            assert!(style_description(id).is_some(), "missing style {}", id);
        }
    }

    #[test]
    fn test_unknown_style_misses() {
        assert!(style_description("cyberpunk").is_none());
    }
}
