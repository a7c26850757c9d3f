//! Super Receptionist CLI and REST API entry point.
//!
//! Binary name: `recept`
//!
//! Parses CLI arguments, initializes the database and services, then
//! either starts the REST API server or prints a status summary.

mod http;
mod state;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "recept", version, about = "Super Receptionist chat backend")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Machine-readable JSON output for CLI commands
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8891, env = "PORT")]
        port: u16,

        /// Host interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Show configuration and stored data summary
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,receptionist=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Super Receptionist API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Status => {
            let conversations = state.chat_service.list_conversations().await?;
            let message_count: u32 = conversations.iter().map(|c| c.message_count).sum();
            let menu_items = state.shop_service.menu().await?.len();
            let designs = state.shop_service.designs().await?.len();

            if cli.json {
                let status = serde_json::json!({
                    "data_dir": state.data_dir.display().to_string(),
                    "provider": state.config.provider.to_string(),
                    "model": state.config.resolved_model(),
                    "conversations": conversations.len(),
                    "messages": message_count,
                    "menu_items": menu_items,
                    "cake_designs": designs,
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!();
                println!(
                    "  {} Super Receptionist status",
                    console::style("🧁").bold()
                );
                println!();
                println!("  Data dir:      {}", state.data_dir.display());
                println!(
                    "  Provider:      {} ({})",
                    state.config.provider,
                    state.config.resolved_model()
                );
                println!("  Conversations: {}", conversations.len());
                println!("  Messages:      {message_count}");
                println!("  Menu items:    {menu_items}");
                println!("  Cake designs:  {designs}");
                println!();
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
