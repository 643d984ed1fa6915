use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserInfo};
use crate::services::auth_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

#[axum::debug_handler]
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /auth/register - Registering {}", req.email);
    let response = auth_service::register(state.users.as_ref(), &state.tokens, req)
        .await
        .map_err(|e| {
            error!("Registration failed: {}", e);
            e
        })?;
    Ok(Json(response))
}

#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /auth/login - Login attempt for {}", req.email);
    let response = auth_service::login(state.users.as_ref(), &state.tokens, req).await?;
    Ok(Json(response))
}

async fn me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    info!("GET /auth/me - {}", user.email);
    Json(MeResponse {
        success: true,
        user: UserInfo::from(&user),
    })
}
