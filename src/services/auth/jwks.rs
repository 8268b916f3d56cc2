//! Signing key set published by the identity provider (`/.well-known/jwks.json`).
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::DecodingKey;
use serde::{Deserialize, Serialize};
use url::Url;

use super::AuthError;

/// One entry of the `keys` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default, rename = "use")]
    pub key_use: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
    // RSA components (base64url). Absent for other key types.
    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

impl Jwk {
    /// Build the RSA verification key. Anything that is not a usable RSA key
    /// is reported as a malformed token, since the token pointed at it.
    pub fn decoding_key(&self) -> Result<DecodingKey, AuthError> {
        if !self.kty.eq_ignore_ascii_case("RSA") {
            return Err(AuthError::MalformedToken);
        }
        if let Some(key_use) = self.key_use.as_deref()
            && key_use != "sig"
        {
            return Err(AuthError::MalformedToken);
        }

        match (self.n.as_deref(), self.e.as_deref()) {
            (Some(n), Some(e)) => {
                DecodingKey::from_rsa_components(n, e).map_err(|_| AuthError::MalformedToken)
            }
            _ => Err(AuthError::MalformedToken),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid.as_deref() == Some(kid))
    }
}

/// Where the guard gets its signing keys from.
///
/// Implementations must be cheap to share (`Arc<dyn KeySetSource>`).
#[async_trait]
pub trait KeySetSource: Send + Sync + 'static {
    // Name for logs.
    fn source_name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Jwks, AuthError>;

    /// Look up the key for `kid`. `Ok(None)` means the set has no such key.
    async fn find_key(&self, kid: &str) -> Result<Option<Jwk>, AuthError> {
        let jwks = self.fetch().await?;
        Ok(jwks.find(kid).cloned())
    }
}

/// Fetches the key set over HTTPS on every call.
#[derive(Debug, Clone)]
pub struct RemoteKeySet {
    url: Url,
    client: reqwest::Client,
}

impl RemoteKeySet {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    /// `https://{domain}/.well-known/jwks.json`
    pub fn url_for_domain(domain: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("https://{domain}/"))?.join(".well-known/jwks.json")
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl KeySetSource for RemoteKeySet {
    fn source_name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(&self) -> Result<Jwks, AuthError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        resp.json::<Jwks>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid jwks document: {e}")))
    }
}

/// A fixed key set (local JWKS file, tests).
#[derive(Debug, Clone)]
pub struct StaticKeySet {
    jwks: Jwks,
}

impl StaticKeySet {
    pub fn new(jwks: Jwks) -> Self {
        Self { jwks }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

#[async_trait]
impl KeySetSource for StaticKeySet {
    fn source_name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Jwks, AuthError> {
        Ok(self.jwks.clone())
    }
}
