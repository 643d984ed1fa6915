use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::routes::{auth, data, health, public, stocks};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .route("/api/", get(api_root))
        .nest("/api/auth", auth::router())
        .nest("/api/public", public::router())
        .nest("/api/data", data::router())
        .nest("/api/stocks", stocks::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Stock Market Analysis API" }))
}
