use axum::async_trait;
use axum::extract::FromRequestParts;
use http::header::AUTHORIZATION;
use http::request::Parts;
use tracing::debug;

use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;
use crate::store::UserStore;

/// Extractor guarding protected routes.
///
/// Resolves `Authorization: Bearer <token>` to a known user before the
/// handler body runs. Missing header, bad scheme, expired or forged token,
/// and a verified-but-unknown email all reject with the same 401.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;

        let email = state.tokens.verify(token).map_err(|e| {
            debug!("Token rejected: {}", e);
            AppError::Unauthorized
        })?;

        match state.users.find_by_email(&email).await {
            Some(user) => Ok(AuthUser(user)),
            None => {
                debug!("Token verified for unknown email {}", email);
                Err(AppError::Unauthorized)
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
