//! Authentication service
//!
//! Verifies email/password credentials and issues signed session tokens.

use std::sync::{Arc, OnceLock};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::auth::TokenSigner;
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Service for authenticating users
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenSigner>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenSigner>) -> Self {
        Self { users, tokens }
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown email and wrong password take the same path out: both return
    /// `Unauthorized` with no detail, and the unknown-email branch still runs
    /// a hash verification so the two are not observably different.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                verify_password(password, dummy_hash());
                return Err(AppError::Unauthorized);
            }
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized);
        }

        tracing::debug!(user_id = %user.id, role = %user.role, "login succeeded");
        self.tokens.issue(&user)
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| DomainError::Internal("Password hashing failed".to_string()))?
        .to_string();

    Ok(hash)
}

/// Verify a password against an Argon2 PHC string.
///
/// An unparseable hash counts as a mismatch rather than an error; the caller
/// cannot do anything more useful with it than reject the login.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Hash verified against when the email is unknown, computed once.
fn dummy_hash() -> &'static str {
    static DUMMY: OnceLock<String> = OnceLock::new();
    DUMMY.get_or_init(|| hash_password("fabrichub.login.dummy").unwrap_or_default())
}
