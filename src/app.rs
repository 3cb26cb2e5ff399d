use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::services::AdminAccountService;

/// Request-scoped application state. Cloned per request; everything inside
/// is an immutable shared handle.
#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<AdminAccountService>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Admin operations (bearer-token aware)
        .route("/api/admin/delete-account", post(handlers::admin::delete_account))
        // Global middleware
        .layer(axum::middleware::from_fn(crate::middleware::attach_identity))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Admin API (Rust)",
            "version": version,
            "description": "Callable admin account management backed by managed identity services",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "delete_account": "POST /api/admin/delete-account (admin bearer token required)",
            }
        }
    }))
}

async fn health() -> Json<Value> {
    let now = chrono::Utc::now();

    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now
        }
    }))
}
