//! Time-bounded cache in front of a `KeySetSource`.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use super::AuthError;
use super::jwks::{Jwk, Jwks, KeySetSource};

/// Shortest gap between two reloads caused by an unknown `kid`.
pub const MISS_RELOAD_INTERVAL: Duration = Duration::from_secs(10);

type Slot = Option<(Instant, Arc<Jwks>)>;

/// Serves the last fetched key set while it is younger than `ttl`.
///
/// A `kid` that is missing from a cached set triggers a reload before the
/// lookup is reported as a miss, so rotated keys are picked up without
/// waiting for the TTL. Such reloads happen at most once per
/// `MISS_RELOAD_INTERVAL`, and only one reload is in flight at a time:
/// callers that queued behind it reuse its result.
pub struct CachedKeySet<S: KeySetSource> {
    inner: S,
    ttl: Duration,
    slot: RwLock<Slot>,
    reloading: Mutex<()>,
}

impl<S: KeySetSource> CachedKeySet<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            slot: RwLock::new(None),
            reloading: Mutex::new(()),
        }
    }

    async fn snapshot(&self) -> Slot {
        self.slot.read().await.clone()
    }

    fn is_fresh(&self, fetched_at: Instant) -> bool {
        fetched_at.elapsed() < self.ttl
    }

    /// Reload unless another caller already did so after `seen`.
    async fn reload_after(&self, seen: Option<Instant>) -> Result<Arc<Jwks>, AuthError> {
        let _reloading = self.reloading.lock().await;

        if let Some((fetched_at, jwks)) = self.slot.read().await.as_ref()
            && Some(*fetched_at) > seen
            && self.is_fresh(*fetched_at)
        {
            return Ok(jwks.clone());
        }

        let jwks = Arc::new(self.inner.fetch().await?);
        *self.slot.write().await = Some((Instant::now(), jwks.clone()));
        tracing::debug!(
            source = self.inner.source_name(),
            keys = jwks.keys.len(),
            "signing key set reloaded"
        );
        Ok(jwks)
    }
}

#[async_trait]
impl<S: KeySetSource> KeySetSource for CachedKeySet<S> {
    fn source_name(&self) -> &'static str {
        self.inner.source_name()
    }

    async fn fetch(&self) -> Result<Jwks, AuthError> {
        let seen = self.snapshot().await;
        if let Some((fetched_at, jwks)) = &seen
            && self.is_fresh(*fetched_at)
        {
            return Ok(jwks.as_ref().clone());
        }
        let jwks = self.reload_after(seen.map(|(at, _)| at)).await?;
        Ok(jwks.as_ref().clone())
    }

    async fn find_key(&self, kid: &str) -> Result<Option<Jwk>, AuthError> {
        let seen = self.snapshot().await;
        if let Some((fetched_at, jwks)) = &seen
            && self.is_fresh(*fetched_at)
        {
            if let Some(key) = jwks.find(kid) {
                return Ok(Some(key.clone()));
            }
            if fetched_at.elapsed() < MISS_RELOAD_INTERVAL {
                tracing::debug!(kid, "unknown kid, reload skipped");
                return Ok(None);
            }
        }

        let jwks = self.reload_after(seen.map(|(at, _)| at)).await?;
        Ok(jwks.find(kid).cloned())
    }
}
