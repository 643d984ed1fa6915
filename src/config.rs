use chrono::Duration;

/// Server configuration collected from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub port: u16,
}

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET is not set".to_string())?;

        let ttl_days = std::env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_DAYS);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let config = Self {
            jwt_secret,
            token_ttl: Duration::days(ttl_days),
            port,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.trim().is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {} bytes, got {}",
                MIN_SECRET_LEN,
                self.jwt_secret.len()
            ));
        }
        if self.token_ttl <= Duration::zero() {
            return Err("TOKEN_TTL_DAYS must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_ttl: Duration::days(7),
            port: 3000,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = base_config();
        config.jwt_secret = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_secret_rejected() {
        let mut config = base_config();
        config.jwt_secret = "                                        ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = base_config();
        config.token_ttl = Duration::zero();
        assert!(config.validate().is_err());
    }
}
