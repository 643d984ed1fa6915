use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Email of the authenticated user.
    sub: String,
    iat: i64,
    exp: i64,
}

/// Stateless issuer/verifier for signed session tokens (HS256).
///
/// Tokens are not stored server side; validity is purely signature + expiry,
/// so a token stays live until it naturally expires.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign a token embedding `email` with an absolute expiry `ttl` from now.
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Invalid)
    }

    /// Check signature and expiry, returning the embedded email when both hold.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("unit-test-secret-0123456789abcdef", Duration::days(7))
    }

    #[test]
    fn test_issued_token_verifies_to_same_email() {
        let tokens = service();
        let token = tokens.issue("alice@example.com").unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "alice@example.com");
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new("unit-test-secret-0123456789abcdef", Duration::minutes(-5));
        let token = tokens.issue("alice@example.com").unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(service().verify("not.a.jwt"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = TokenService::new("another-secret-entirely-0123456789", Duration::days(7));
        let token = other.issue("alice@example.com").unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }
}
