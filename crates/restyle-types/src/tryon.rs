//! Inbound try-on contract and mode resolution.

use serde::{Deserialize, Serialize};

use crate::error::TryOnError;

/// The request body the UI sends to `POST /v1/tryon`.
///
/// `image` is always required. The instruction source is either a style
/// identifier (optionally backed by a custom description) or a second photo
/// carrying the garment. Image fields are opaque tokens - a data URI or an
/// absolute URL - and are never validated for size or format here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TryOnRequest {
    /// The person photo.
    #[serde(default)]
    pub image: String,
    /// Style identifier, one of the known catalog ids or anything else.
    #[serde(default)]
    pub style: Option<String>,
    /// Free-form clothing description, used when `style` is unknown.
    #[serde(default)]
    pub custom_prompt: Option<String>,
    /// Second photo supplying the garment (reference mode).
    #[serde(default)]
    pub clothing_image: Option<String>,
}

/// How the instruction text is determined for this request.
#[derive(Debug, Clone, PartialEq)]
pub enum TryOnMode {
    /// Canned style description, with `custom_prompt` as the fallback.
    Style {
        style: Option<String>,
        custom_prompt: Option<String>,
    },
    /// Two-image garment swap.
    Reference { clothing_image: String },
}

impl TryOnRequest {
    /// Validate input presence and resolve the instruction mode.
    ///
    /// Rejects before any network cost: a missing source image or a request
    /// with no instruction source at all is a [`TryOnError::Validation`].
    pub fn mode(&self) -> Result<TryOnMode, TryOnError> {
        if self.image.trim().is_empty() {
            return Err(TryOnError::Validation {
                message: "Please upload a photo".to_string(),
            });
        }

        if let Some(clothing_image) = non_empty(self.clothing_image.as_deref()) {
            return Ok(TryOnMode::Reference { clothing_image });
        }

        let style = non_empty(self.style.as_deref());
        let custom_prompt = non_empty(self.custom_prompt.as_deref());
        if style.is_none() && custom_prompt.is_none() {
            return Err(TryOnError::Validation {
                message: "Please choose a clothing style or attach a clothing photo".to_string(),
            });
        }

        Ok(TryOnMode::Style { style, custom_prompt })
    }
}

impl TryOnMode {
    /// The style id to echo back on success, when one was selected.
    pub fn style_echo(&self) -> Option<&str> {
        match self {
            Self::Style { style, .. } => style.as_deref(),
            Self::Reference { .. } => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// The canonical success payload: exactly one usable image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TryOnSuccess {
    /// Data URI or direct image URL.
    pub image: String,
    /// Echo of the selected style id, when the request used one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}
