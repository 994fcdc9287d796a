use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret used to sign session tokens (HS256)
    pub jwt_secret: String,
    /// Session token lifetime
    pub token_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-not-for-production".to_string()),
            token_ttl: Duration::from_secs(
                env::var("TOKEN_TTL_HOURS")
                    .ok()
                    .and_then(|h| h.parse::<u64>().ok())
                    .unwrap_or(24)
                    * 3600,
            ),
        }
    }
}
