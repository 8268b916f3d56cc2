#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, body::Body, http::Response};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use capstone_api::{
    app::build_router,
    config::Config,
    services::auth::{AuthGuard, TokenVerifier, jwks::StaticKeySet},
    state::AppState,
};

pub const DOMAIN: &str = "tenant.example.com";
pub const ISSUER: &str = "https://tenant.example.com/";
pub const AUDIENCE: &str = "casting";
pub const KID: &str = "test-key-1";

const JWKS: &str = include_str!("../fixtures/jwks.json");
const SIGNING_KEY: &[u8] = include_bytes!("../fixtures/signing_key.pem");
const ROGUE_KEY: &[u8] = include_bytes!("../fixtures/rogue_key.pem");

pub fn guard() -> Arc<AuthGuard> {
    let keys = Arc::new(StaticKeySet::from_json(JWKS).expect("fixture jwks"));
    let verifier = TokenVerifier::new(keys, &[Algorithm::RS256], ISSUER, AUDIENCE, 0);
    Arc::new(AuthGuard::new(verifier))
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Valid claims for this API without a `permissions` entry.
pub fn claims_without_permissions() -> Value {
    json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "sub": "auth0|casting-assistant",
        "exp": now() + 3600,
    })
}

/// Valid claims for this API granting `permissions`.
pub fn claims(permissions: &[&str]) -> Value {
    let mut claims = claims_without_permissions();
    claims["permissions"] = json!(permissions);
    claims
}

fn sign(pem: &[u8], kid: &str, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    let key = EncodingKey::from_rsa_pem(pem).expect("fixture pem");
    jsonwebtoken::encode(&header, claims, &key).expect("sign")
}

/// Token signed with the key published in the fixture JWKS.
pub fn token(claims: &Value) -> String {
    sign(SIGNING_KEY, KID, claims)
}

/// Token signed with a key the JWKS does not publish.
pub fn rogue_token(claims: &Value) -> String {
    sign(ROGUE_KEY, "rogue-key", claims)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://capstone@127.0.0.1:1/unused".to_string()),
        "AUTH0_DOMAIN" => Some(DOMAIN.to_string()),
        "AUTH_AUDIENCE" => Some(AUDIENCE.to_string()),
        _ => None,
    })
    .expect("test config")
}

/// The real application router. The pool never connects, so only requests the
/// guard rejects (or unguarded routes) may be sent through it.
pub fn app() -> Result<Router> {
    let config = config();
    let db = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .context("lazy pool")?;
    Ok(app_with_pool(db))
}

/// The real application router backed by a live (per-test) database.
pub fn app_with_pool(db: PgPool) -> Router {
    build_router(AppState::new(db, guard()), &config())
}

pub async fn body_json(res: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(res.into_body(), 1024 * 1024).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
