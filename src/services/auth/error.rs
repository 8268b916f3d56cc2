/*
 * Responsibility
 * - Failure modes of the bearer-token guard
 * - Each variant carries a stable code and the HTTP status it maps to
 */
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization header is missing or malformed")]
    MissingCredential,

    #[error("unable to parse authentication token")]
    MalformedToken,

    #[error("unable to find the appropriate signing key")]
    UnknownSigningKey,

    #[error("token is expired")]
    TokenExpired,

    #[error("incorrect claims, please check the audience and issuer")]
    InvalidClaims,

    #[error("permissions not included in token")]
    MissingPermissionsClaim,

    #[error("permission not found")]
    PermissionDenied,

    #[error("signing key set is unavailable: {0}")]
    KeySetUnavailable(String),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "authorization_header_missing",
            Self::MalformedToken => "invalid_header",
            Self::UnknownSigningKey => "unknown_signing_key",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims => "invalid_claims",
            Self::MissingPermissionsClaim => "missing_permissions_claim",
            Self::PermissionDenied => "permission_denied",
            Self::KeySetUnavailable(_) => "jwks_unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredential
            | Self::MalformedToken
            | Self::UnknownSigningKey
            | Self::TokenExpired
            | Self::InvalidClaims => StatusCode::UNAUTHORIZED,
            Self::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::KeySetUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to return to clients. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::KeySetUnavailable(_) => "signing key set is unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => Self::InvalidClaims,
            ErrorKind::MissingRequiredClaim(claim) if claim == "aud" || claim == "iss" => {
                Self::InvalidClaims
            }
            _ => Self::MalformedToken,
        }
    }
}
