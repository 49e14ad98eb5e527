//! Prompt builder: turns a try-on mode into a model instruction plus the
//! ordered image attachments.

use restyle_types::TryOnMode;

use crate::styles::{style_description, GENERIC_DESCRIPTION};

/// Editing constraints appended to every instruction, whichever mode.
const EDITING_CONSTRAINTS: &str = "\
Requirements:
1. Keep the facial features, skin tone and hairstyle exactly the same
2. Change only the clothing and accessories
3. Keep the pose and expression natural
4. The clothing must fit the person's body and look naturally worn
5. Keep the overall look coherent: lighting and background must match the original photo
6. Produce a high-quality, photorealistic try-on result

Generate the image directly, without any explanatory text.";

/// A ready-to-send instruction and the images it refers to, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPlan {
    pub instruction: String,
    /// One or two image references; the person photo always comes first.
    pub images: Vec<String>,
}

/// Build the instruction for a resolved mode. Pure, no side effects.
pub fn build_prompt(mode: &TryOnMode, source_image: &str) -> PromptPlan {
    match mode {
        TryOnMode::Style { style, custom_prompt } => {
            let description = style
                .as_deref()
                .and_then(style_description)
                .map(str::to_string)
                .or_else(|| custom_prompt.clone())
                .unwrap_or_else(|| GENERIC_DESCRIPTION.to_string());

            let instruction = format!(
                "From this photo of a person, generate a brand-new image of the same \
                 person wearing {}.\n\n{}",
                description, EDITING_CONSTRAINTS
            );
            PromptPlan { instruction, images: vec![source_image.to_string()] }
        }
        TryOnMode::Reference { clothing_image } => {
            let instruction = format!(
                "Two images are attached. Image 1 shows a person; image 2 shows a \
                 garment. Generate a brand-new image of the person from image 1 \
                 wearing the garment from image 2.\n\n{}",
                EDITING_CONSTRAINTS
            );
            PromptPlan {
                instruction,
                images: vec![source_image.to_string(), clothing_image.clone()],
            }
        }
    }
}
