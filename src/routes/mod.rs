//! Rutas HTTP de la API

pub mod graphql_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/graphql", graphql_routes::create_graphql_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "ev-marketplace",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
