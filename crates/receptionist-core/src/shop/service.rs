//! Shop configuration service.
//!
//! Typed access to the menu, cake designs, system prompt, and conversion
//! instructions, and assembly of the [`ShopContext`] that frames every AI
//! call. Settings documents are stored as raw JSON; this service owns the
//! key names and the typed encoding on either side.

use receptionist_types::error::RepositoryError;
use receptionist_types::shop::{CakeDesign, ConversionInstructions, MenuItem, SystemPrompt};
use tracing::{info, warn};

use crate::chat::prompt::ShopContext;
use crate::shop::repository::{DesignRepository, MenuRepository, SettingsStore};

/// Settings key for the operator-editable system prompt.
const SYSTEM_PROMPT_KEY: &str = "system_prompt";

/// Settings key for the conversion instructions document.
const CONVERSION_INSTRUCTIONS_KEY: &str = "conversion_instructions";

/// Exposes shop configuration to the transport layer and the chat flow.
///
/// Generic over the repository traits so the core stays free of storage
/// concerns.
pub struct ShopService<M: MenuRepository, D: DesignRepository, S: SettingsStore> {
    menu_repo: M,
    design_repo: D,
    settings: S,
}

impl<M: MenuRepository, D: DesignRepository, S: SettingsStore> ShopService<M, D, S> {
    pub fn new(menu_repo: M, design_repo: D, settings: S) -> Self {
        Self {
            menu_repo,
            design_repo,
            settings,
        }
    }

    pub async fn menu(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        self.menu_repo.all().await
    }

    pub async fn update_menu(&self, items: &[MenuItem]) -> Result<(), RepositoryError> {
        self.menu_repo.replace_all(items).await?;
        info!(count = items.len(), "menu replaced");
        Ok(())
    }

    pub async fn designs(&self) -> Result<Vec<CakeDesign>, RepositoryError> {
        self.design_repo.all().await
    }

    pub async fn update_designs(&self, designs: &[CakeDesign]) -> Result<(), RepositoryError> {
        self.design_repo.replace_all(designs).await?;
        info!(count = designs.len(), "cake designs replaced");
        Ok(())
    }

    /// The current system prompt, falling back to the built-in default
    /// when none has been saved yet.
    pub async fn system_prompt(&self) -> Result<SystemPrompt, RepositoryError> {
        match self.settings.get(SYSTEM_PROMPT_KEY).await? {
            Some(value) => Ok(decode_or_default(SYSTEM_PROMPT_KEY, value)),
            None => Ok(SystemPrompt::default()),
        }
    }

    pub async fn update_system_prompt(&self, prompt: &SystemPrompt) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(prompt)
            .map_err(|e| RepositoryError::Query(format!("failed to encode system prompt: {e}")))?;
        self.settings.set(SYSTEM_PROMPT_KEY, &value).await
    }

    pub async fn conversion_instructions(
        &self,
    ) -> Result<ConversionInstructions, RepositoryError> {
        match self.settings.get(CONVERSION_INSTRUCTIONS_KEY).await? {
            Some(value) => Ok(decode_or_default(CONVERSION_INSTRUCTIONS_KEY, value)),
            None => Ok(ConversionInstructions::default()),
        }
    }

    pub async fn update_conversion_instructions(
        &self,
        instructions: &ConversionInstructions,
    ) -> Result<(), RepositoryError> {
        let value = serde_json::to_value(instructions).map_err(|e| {
            RepositoryError::Query(format!("failed to encode conversion instructions: {e}"))
        })?;
        self.settings.set(CONVERSION_INSTRUCTIONS_KEY, &value).await
    }

    /// Assemble the full context for an AI call from current configuration.
    pub async fn shop_context(&self) -> Result<ShopContext, RepositoryError> {
        Ok(ShopContext {
            system_prompt: self.system_prompt().await?,
            menu: self.menu().await?,
            designs: self.designs().await?,
            conversion_instructions: self.conversion_instructions().await?,
        })
    }
}

/// Decode a stored settings document, falling back to the type's default
/// when the stored JSON no longer matches the expected shape.
fn decode_or_default<T: serde::de::DeserializeOwned + Default>(
    key: &str,
    value: serde_json::Value,
) -> T {
    match serde_json::from_value(value) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(key, error = %e, "stored settings document is malformed, using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryShop {
        menu: Mutex<Vec<MenuItem>>,
    }

    impl MenuRepository for &InMemoryShop {
        async fn all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
            Ok(self.menu.lock().unwrap().clone())
        }

        async fn replace_all(&self, items: &[MenuItem]) -> Result<(), RepositoryError> {
            *self.menu.lock().unwrap() = items.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryDesigns {
        designs: Mutex<Vec<CakeDesign>>,
    }

    impl DesignRepository for &InMemoryDesigns {
        async fn all(&self) -> Result<Vec<CakeDesign>, RepositoryError> {
            Ok(self.designs.lock().unwrap().clone())
        }

        async fn replace_all(&self, designs: &[CakeDesign]) -> Result<(), RepositoryError> {
            *self.designs.lock().unwrap() = designs.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemorySettings {
        values: Mutex<HashMap<String, serde_json::Value>>,
    }

    impl SettingsStore for &InMemorySettings {
        async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, RepositoryError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), RepositoryError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.clone());
            Ok(())
        }
    }

    fn fixtures() -> (InMemoryShop, InMemoryDesigns, InMemorySettings) {
        (
            InMemoryShop::default(),
            InMemoryDesigns::default(),
            InMemorySettings::default(),
        )
    }

    #[tokio::test]
    async fn test_system_prompt_defaults_until_set() {
        let (menu, designs, settings) = fixtures();
        let service = ShopService::new(&menu, &designs, &settings);

        let prompt = service.system_prompt().await.unwrap();
        assert_eq!(prompt, SystemPrompt::default());

        let custom = SystemPrompt {
            prompt: "Short answers only.".to_string(),
        };
        service.update_system_prompt(&custom).await.unwrap();
        assert_eq!(service.system_prompt().await.unwrap(), custom);
    }

    #[tokio::test]
    async fn test_conversion_instructions_roundtrip() {
        let (menu, designs, settings) = fixtures();
        let service = ShopService::new(&menu, &designs, &settings);

        assert_eq!(
            service.conversion_instructions().await.unwrap(),
            ConversionInstructions::default()
        );

        let instructions = ConversionInstructions {
            instructions: "Dates as YYYY-MM-DD.".to_string(),
            examples: vec![serde_json::json!({"in": "3pm Friday", "out": "2026-08-07"})],
        };
        service
            .update_conversion_instructions(&instructions)
            .await
            .unwrap();
        assert_eq!(
            service.conversion_instructions().await.unwrap(),
            instructions
        );
    }

    #[tokio::test]
    async fn test_malformed_settings_fall_back_to_default() {
        let (menu, designs, settings) = fixtures();
        settings
            .values
            .lock()
            .unwrap()
            .insert("system_prompt".to_string(), serde_json::json!([1, 2, 3]));
        let service = ShopService::new(&menu, &designs, &settings);

        assert_eq!(
            service.system_prompt().await.unwrap(),
            SystemPrompt::default()
        );
    }

    #[tokio::test]
    async fn test_shop_context_collects_everything() {
        let (menu, designs, settings) = fixtures();
        let service = ShopService::new(&menu, &designs, &settings);

        service
            .update_menu(&[MenuItem {
                name: "Lemon drizzle".to_string(),
                description: None,
                price: Some(12.0),
                category: None,
            }])
            .await
            .unwrap();
        service
            .update_designs(&[CakeDesign {
                design_id: "d1".to_string(),
                name: "Classic".to_string(),
                description: "Two tiers".to_string(),
                image_url: None,
            }])
            .await
            .unwrap();

        let context = service.shop_context().await.unwrap();
        assert_eq!(context.menu.len(), 1);
        assert_eq!(context.designs.len(), 1);
        assert!(!context.system_prompt.prompt.is_empty());
    }
}
