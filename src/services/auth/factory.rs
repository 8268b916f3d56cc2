/// Factory: build `AuthGuard` from application `Config`.
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::jwks::{KeySetSource, RemoteKeySet, StaticKeySet};
use crate::services::auth::{AuthGuard, CachedKeySet, TokenVerifier};

pub fn build_auth_guard(config: &Config) -> Result<Arc<AuthGuard>, AppError> {
    let keys = build_key_source(config)?;

    let verifier = TokenVerifier::new(
        keys,
        &config.auth_algorithms,
        &config.auth_issuer(),
        &config.auth_audience,
        config.auth_leeway_seconds,
    );

    Ok(Arc::new(AuthGuard::new(verifier)))
}

fn build_key_source(config: &Config) -> Result<Arc<dyn KeySetSource>, AppError> {
    if let Some(path) = &config.auth_jwks_path {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "failed to read local JWKS file");
            AppError::Internal
        })?;
        let keys = StaticKeySet::from_json(&raw).map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "invalid local JWKS file");
            AppError::Internal
        })?;
        tracing::info!(path = %path.display(), "using local signing key set");
        return Ok(Arc::new(keys));
    }

    let url = RemoteKeySet::url_for_domain(&config.auth0_domain).map_err(|e| {
        tracing::error!(error = %e, domain = %config.auth0_domain, "invalid identity provider domain");
        AppError::Internal
    })?;
    let remote = RemoteKeySet::new(url, Duration::from_secs(config.jwks_fetch_timeout_seconds))
        .map_err(|e| {
            tracing::error!(error = %e, "failed to build JWKS http client");
            AppError::Internal
        })?;
    tracing::info!(url = %remote.url(), ttl = config.jwks_cache_ttl_seconds, "using remote signing key set");

    if config.jwks_cache_ttl_seconds == 0 {
        Ok(Arc::new(remote))
    } else {
        let ttl = Duration::from_secs(config.jwks_cache_ttl_seconds);
        Ok(Arc::new(CachedKeySet::new(remote, ttl)))
    }
}
