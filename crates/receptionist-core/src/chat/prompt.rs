//! AI request assembly.
//!
//! Builds the system context block from shop configuration and converts
//! stored history into the provider-agnostic message list. The system
//! context mirrors what the shop operator curates in the training UI:
//! system prompt, menu, cake designs, and conversion instructions.

use receptionist_types::chat::ChatMessage;
use receptionist_types::llm::Message;
use receptionist_types::shop::{CakeDesign, ConversionInstructions, MenuItem, SystemPrompt};

/// Everything the operator has configured that frames an AI call.
#[derive(Debug, Clone, Default)]
pub struct ShopContext {
    pub system_prompt: SystemPrompt,
    pub menu: Vec<MenuItem>,
    pub designs: Vec<CakeDesign>,
    pub conversion_instructions: ConversionInstructions,
}

/// Render the shop context into the system block sent with every request.
///
/// Design images are stripped before rendering: a data-URL payload would
/// dwarf the rest of the prompt and the model cannot read it anyway.
pub fn render_system_context(ctx: &ShopContext) -> String {
    let designs_for_prompt: Vec<serde_json::Value> = ctx
        .designs
        .iter()
        .map(|d| {
            serde_json::json!({
                "design_id": d.design_id,
                "name": d.name,
                "description": d.description,
            })
        })
        .collect();

    let menu_json = serde_json::to_string_pretty(&ctx.menu).unwrap_or_else(|_| "[]".to_string());
    let designs_json =
        serde_json::to_string_pretty(&designs_for_prompt).unwrap_or_else(|_| "[]".to_string());

    format!(
        "{}\n\nShop Menu: {}\nCake Designs: {}\nConversion Instructions: {}",
        ctx.system_prompt.prompt, menu_json, designs_json, ctx.conversion_instructions.instructions
    )
}

/// Convert stored history into the provider message list.
///
/// The history already ends with the just-persisted user message, so no
/// extra message is appended here.
pub fn history_to_messages(history: &[ChatMessage]) -> Vec<Message> {
    history
        .iter()
        .map(|m| Message {
            role: m.role,
            content: m.text.clone(),
        })
        .collect()
}
