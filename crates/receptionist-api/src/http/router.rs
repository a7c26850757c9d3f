//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, request tracing.
//!
//! In production, the chat/training frontend is served from `static/`
//! (configurable via `RECEPTIONIST_WEB_DIR`). API routes take priority;
//! unknown paths fall through to the frontend's `index.html`. If the
//! directory does not exist, only the API is served.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Chat
        .route("/chat", post(handlers::chat::send_message))
        .route(
            "/chat/messages/{id}/edit",
            post(handlers::chat::edit_message),
        )
        // Conversations
        .route(
            "/chat/conversations",
            get(handlers::conversation::list_conversations),
        )
        .route(
            "/chat/conversations/{id}/messages",
            get(handlers::conversation::get_history),
        )
        .route(
            "/chat/conversations/{id}",
            delete(handlers::conversation::delete_conversation),
        )
        // Shop configuration
        .route(
            "/menu",
            get(handlers::menu::get_menu).put(handlers::menu::update_menu),
        )
        .route(
            "/cake-designs",
            get(handlers::design::get_designs).put(handlers::design::update_designs),
        )
        .route(
            "/system-prompt",
            get(handlers::settings::get_system_prompt)
                .put(handlers::settings::update_system_prompt),
        )
        .route(
            "/conversion-instructions",
            get(handlers::settings::get_conversion_instructions)
                .put(handlers::settings::update_conversion_instructions),
        );

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the frontend from disk if the directory exists. API routes
    // and /health take priority; unknown paths fall through to index.html.
    let web_dir = std::env::var("RECEPTIONIST_WEB_DIR").unwrap_or_else(|_| "static".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
