use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::auth::AuthUser;
use crate::models::DataAvailability;
use crate::services::analysis_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/availability", get(availability))
}

async fn availability(_user: AuthUser) -> Json<DataAvailability> {
    info!("GET /data/availability");
    Json(analysis_service::availability())
}
