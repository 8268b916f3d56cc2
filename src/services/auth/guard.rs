use axum::http::HeaderMap;

use super::bearer::extract_token;
use super::permissions::check_permission;
use super::{AuthError, Claims, TokenVerifier};

/// Request-scoped authorization check.
///
/// Runs extract -> verify/decode -> check-permission in order and stops at the
/// first failure. Built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    verifier: TokenVerifier,
}

impl AuthGuard {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }

    pub async fn authorize(
        &self,
        headers: &HeaderMap,
        permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract_token(headers)?;
        let claims = self.verifier.verify_decode(token).await?;
        check_permission(&claims, permission)?;
        Ok(claims)
    }
}
