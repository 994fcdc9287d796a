//! Session token signing and verification
//!
//! Tokens are HS256 JWTs carrying the user id and role. The secret and
//! lifetime come from configuration.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Role, User, UserId};
use crate::error::{AppError, DomainError};

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse::<i32>()
            .map(UserId)
            .map_err(|_| AppError::Unauthorized)
    }
}

/// Signs and verifies session tokens with a shared secret
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for an authenticated user.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.0.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AppError::Domain(DomainError::Internal(format!(
                "Token signing failed: {}",
                e
            )))
        })
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Every failure mode collapses to `Unauthorized`; the caller has no use
    /// for the distinction between expired, tampered, and garbage tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_admin;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let admin = test_admin("adminpass");
        let token = signer().issue(&admin).unwrap();

        let claims = signer().verify(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), admin.id);
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let admin = test_admin("adminpass");
        let token = signer().issue(&admin).unwrap();

        let other = TokenSigner::new("different-secret", Duration::from_secs(3600));
        assert!(matches!(other.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn verify_rejects_expired_token() {
        // Well past the default validation leeway
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "1".to_string(),
            role: Role::Admin,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            signer().verify(&token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            signer().verify("not.a.token"),
            Err(AppError::Unauthorized)
        ));
    }
}
