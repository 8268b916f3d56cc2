use std::sync::Arc;

use jsonwebtoken::{Algorithm, Validation};
use serde_json::{Map, Value};

use super::jwks::KeySetSource;
use super::{AuthError, Claims};

/// Verifies RS256 (or otherwise configured) access tokens against the
/// identity provider's signing key set.
///
/// `jsonwebtoken::Validation` checks:
/// - signature with the key named by the header `kid`
/// - `exp` (with `leeway`)
/// - `aud` and `iss`, both required
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<dyn KeySetSource>,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("keys", &self.keys.source_name())
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(
        keys: Arc<dyn KeySetSource>,
        algorithms: &[Algorithm],
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Self {
        let primary = algorithms.first().copied().unwrap_or(Algorithm::RS256);
        let mut validation = Validation::new(primary);
        if !algorithms.is_empty() {
            validation.algorithms = algorithms.to_vec();
        }
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        validation.leeway = leeway_seconds;

        Self { keys, validation }
    }

    /// Verify and decode a bearer token.
    ///
    /// The key set is consulted before any claim is looked at, so a token
    /// naming an unknown `kid` is rejected as `UnknownSigningKey` even if it
    /// is also expired.
    pub async fn verify_decode(&self, token: &str) -> Result<Claims, AuthError> {
        let header = jsonwebtoken::decode_header(token).map_err(|_| AuthError::MalformedToken)?;
        let kid = header.kid.ok_or(AuthError::MalformedToken)?;

        let jwk = self
            .keys
            .find_key(&kid)
            .await?
            .ok_or(AuthError::UnknownSigningKey)?;
        let key = jwk.decoding_key()?;

        let data = jsonwebtoken::decode::<Map<String, Value>>(token, &key, &self.validation)?;
        Ok(Claims::new(data.claims))
    }
}
