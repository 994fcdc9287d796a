//! Bearer-token middleware for the admin routes
//!
//! Extracts the Authorization header, verifies the token, and rejects
//! non-admin callers before any handler runs. The authenticated identity is
//! made available to handlers through request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::entities::{Role, UserId};
use crate::error::AppError;
use crate::AppState;

/// Identity of the caller, inserted by [`admin_auth_middleware`]
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub role: Role,
}

/// Middleware guarding the admin routes.
///
/// Missing/malformed credentials are `Unauthorized`; a valid token for a
/// non-admin role is `Forbidden`.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request).ok_or(AppError::Unauthorized)?;
    let claims = state.tokens.verify(token)?;

    if claims.role != Role::Admin {
        tracing::debug!(role = %claims.role, "non-admin token on admin route");
        return Err(AppError::Forbidden);
    }

    let user = AuthUser {
        id: claims.user_id()?,
        role: claims.role,
    };
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header
fn extract_bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}
