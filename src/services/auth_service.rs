use tracing::info;

use crate::auth::{self, TokenService};
use crate::errors::AppError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserInfo};
use crate::store::{UserStore, UserStoreError};

/// Create an account and hand back a session token for it.
pub async fn register(
    users: &dyn UserStore,
    tokens: &TokenService,
    req: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    validate_registration(&req)?;

    let password_hash = auth::hash_password(&req.password)?;
    let user = User::new(req.name.trim().to_string(), req.email.clone(), password_hash);

    let user = users.insert(user).await.map_err(|e| match e {
        UserStoreError::AlreadyExists => {
            AppError::Validation("Email already registered".to_string())
        }
    })?;

    info!("Registered new user {}", user.email);
    issue_session(tokens, user)
}

/// Verify credentials and hand back a session token.
///
/// An unknown email and a wrong password produce the same error, so the
/// response does not reveal which emails are registered.
pub async fn login(
    users: &dyn UserStore,
    tokens: &TokenService,
    req: LoginRequest,
) -> Result<AuthResponse, AppError> {
    let user = users
        .find_by_email(&req.email)
        .await
        .ok_or(AppError::InvalidCredentials)?;

    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    info!("User {} logged in", user.email);
    issue_session(tokens, user)
}

fn issue_session(tokens: &TokenService, user: User) -> Result<AuthResponse, AppError> {
    let token = tokens
        .issue(&user.email)
        .map_err(|e| AppError::Internal(format!("token issuance failed: {}", e)))?;

    Ok(AuthResponse {
        success: true,
        token,
        user: UserInfo::from(&user),
    })
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use chrono::Duration;

    fn tokens() -> TokenService {
        TokenService::new("auth-service-test-secret-0123456789", Duration::days(7))
    }

    fn register_req(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let users = InMemoryUserStore::new();
        let tokens = tokens();

        let registered = register(&users, &tokens, register_req("alice@example.com"))
            .await
            .unwrap();
        assert!(registered.success);
        assert_eq!(registered.user.plan, "basic");
        assert_eq!(tokens.verify(&registered.token).unwrap(), "alice@example.com");

        let logged_in = login(
            &users,
            &tokens,
            LoginRequest {
                email: "alice@example.com".to_string(),
                password: "correct horse".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(logged_in.user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_first_user() {
        let users = InMemoryUserStore::new();
        let tokens = tokens();

        let first = register(&users, &tokens, register_req("alice@example.com"))
            .await
            .unwrap();

        let mut second = register_req("alice@example.com");
        second.name = "Impostor".to_string();
        let err = register(&users, &tokens, second).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let kept = users.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(kept.id, first.user.id);
        assert_eq!(kept.name, "Alice");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_alike() {
        let users = InMemoryUserStore::new();
        let tokens = tokens();
        register(&users, &tokens, register_req("alice@example.com"))
            .await
            .unwrap();

        let wrong_password = login(
            &users,
            &tokens,
            LoginRequest {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap_err();

        let unknown_email = login(
            &users,
            &tokens,
            LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "correct horse".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_registration_input_validation() {
        let users = InMemoryUserStore::new();
        let tokens = tokens();

        let mut bad_email = register_req("not-an-email");
        bad_email.email = "not-an-email".to_string();
        assert!(register(&users, &tokens, bad_email).await.is_err());

        let mut blank_name = register_req("bob@example.com");
        blank_name.name = "   ".to_string();
        assert!(register(&users, &tokens, blank_name).await.is_err());
    }
}
