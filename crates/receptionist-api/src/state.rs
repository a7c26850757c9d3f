//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the REST API. Services are generic over repository/provider traits, but
//! AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use receptionist_core::chat::service::{ChatService, LlmSettings};
use receptionist_core::shop::service::ShopService;
use receptionist_infra::config::load_app_config;
use receptionist_infra::llm::{ShopLlmProvider, build_provider};
use receptionist_infra::sqlite::chat::SqliteConversationRepository;
use receptionist_infra::sqlite::design::SqliteDesignRepository;
use receptionist_infra::sqlite::menu::SqliteMenuRepository;
use receptionist_infra::sqlite::pool::{DatabasePool, default_data_dir};
use receptionist_infra::sqlite::settings::SqliteSettingsStore;
use receptionist_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteConversationRepository, ShopLlmProvider>;

pub type ConcreteShopService =
    ShopService<SqliteMenuRepository, SqliteDesignRepository, SqliteSettingsStore>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub shop_service: Arc<ConcreteShopService>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = PathBuf::from(default_data_dir());

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("receptionist.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        // Load config and build the AI provider it names
        let config = load_app_config(&data_dir).await;
        let provider = build_provider(&config);

        // Wire chat service
        let chat_repo = SqliteConversationRepository::new(db_pool.clone());
        let chat_service = ChatService::new(
            chat_repo,
            provider,
            LlmSettings {
                model: config.resolved_model(),
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            },
        );

        // Wire shop configuration service
        let shop_service = ShopService::new(
            SqliteMenuRepository::new(db_pool.clone()),
            SqliteDesignRepository::new(db_pool.clone()),
            SqliteSettingsStore::new(db_pool.clone()),
        );

        Ok(Self {
            chat_service: Arc::new(chat_service),
            shop_service: Arc::new(shop_service),
            config,
            data_dir,
        })
    }
}
