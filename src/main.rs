use std::sync::Arc;

use anyhow::Context;

use admin_api_rust::app::{app, AppState};
use admin_api_rust::config;
use admin_api_rust::services::AdminAccountService;
use admin_api_rust::stores::{FirestoreRoleStore, IdentityToolkitProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up FIREBASE_* and the JWT secret
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Admin API in {:?} mode", config.environment);

    // One shared HTTP client for both collaborators
    let client = reqwest::Client::new();
    let role_store = Arc::new(FirestoreRoleStore::new(client.clone(), &config.firebase));
    let identity_provider = Arc::new(IdentityToolkitProvider::new(client, &config.firebase));

    let state = AppState {
        admin_service: Arc::new(AdminAccountService::new(role_store, identity_provider)),
    };

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Admin API Rust server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
