/*
 * Responsibility
 * - Read settings from the environment (DATABASE_URL, CORS, identity provider)
 * - Validate them once at startup (missing required values fail the boot)
 */
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Identity provider
    pub auth0_domain: String,
    pub auth_audience: String,
    pub auth_algorithms: Vec<Algorithm>,
    pub auth_leeway_seconds: u64,

    // Signing key set
    pub jwks_cache_ttl_seconds: u64,
    pub jwks_fetch_timeout_seconds: u64,
    pub auth_jwks_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let app_env = AppEnv::parse(var("APP_ENV").as_deref());

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth0_domain = var("AUTH0_DOMAIN")
            .map(|d| d.trim().trim_end_matches('/').to_string())
            .filter(|d| !d.is_empty())
            .ok_or(ConfigError::Missing("AUTH0_DOMAIN"))?;
        if auth0_domain.contains("://") {
            return Err(ConfigError::Invalid("AUTH0_DOMAIN"));
        }

        let auth_audience = var("AUTH_AUDIENCE")
            .filter(|a| !a.trim().is_empty())
            .ok_or(ConfigError::Missing("AUTH_AUDIENCE"))?;

        let auth_algorithms = match var("AUTH_ALGORITHMS") {
            Some(raw) => parse_algorithms(&raw)?,
            None => vec![Algorithm::RS256],
        };

        let auth_leeway_seconds = parse_u64(var("AUTH_LEEWAY_SECONDS"), "AUTH_LEEWAY_SECONDS", 0)?;
        let jwks_cache_ttl_seconds =
            parse_u64(var("JWKS_CACHE_TTL_SECONDS"), "JWKS_CACHE_TTL_SECONDS", 600)?;
        let jwks_fetch_timeout_seconds = parse_u64(
            var("JWKS_FETCH_TIMEOUT_SECONDS"),
            "JWKS_FETCH_TIMEOUT_SECONDS",
            5,
        )?;

        let auth_jwks_path = var("AUTH_JWKS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            database_url,
            app_env,
            cors_allowed_origins,
            auth0_domain,
            auth_audience,
            auth_algorithms,
            auth_leeway_seconds,
            jwks_cache_ttl_seconds,
            jwks_fetch_timeout_seconds,
            auth_jwks_path,
        })
    }

    /// Tokens must be issued by `https://{domain}/`.
    pub fn auth_issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }
}

fn parse_u64(raw: Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match raw {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

// Only asymmetric algorithms make sense against a published key set.
fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, ConfigError> {
    let algorithms = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Algorithm::from_str(s).map_err(|_| ConfigError::Invalid("AUTH_ALGORITHMS")))
        .collect::<Result<Vec<_>, _>>()?;

    let all_rsa = algorithms.iter().all(|alg| {
        matches!(
            alg,
            Algorithm::RS256
                | Algorithm::RS384
                | Algorithm::RS512
                | Algorithm::PS256
                | Algorithm::PS384
                | Algorithm::PS512
        )
    });

    if algorithms.is_empty() || !all_rsa {
        return Err(ConfigError::Invalid("AUTH_ALGORITHMS"));
    }
    Ok(algorithms)
}
