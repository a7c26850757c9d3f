//! Shop configuration records: menu items, cake designs, and the free-form
//! settings documents (system prompt, conversion instructions) that shape
//! the receptionist's answers.

use serde::{Deserialize, Serialize};

/// One entry on the shop menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A cake design in the shop's catalog.
///
/// `image_url` may be a plain URL or a `data:image/...;base64,` URL; the
/// storage layer decodes data URLs to binary and re-encodes them on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeDesign {
    pub design_id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The operator-editable system prompt that frames every AI call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemPrompt {
    pub prompt: String,
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self {
            prompt: "You are an AI receptionist for a cake shop. Answer questions \
                     about the menu and cake designs, take order details accurately, \
                     and follow the shop owner's instructions for order processing."
                .to_string(),
        }
    }
}

/// Operator instructions for converting order text into structured records,
/// with optional worked examples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionInstructions {
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub examples: Vec<serde_json::Value>,
}
