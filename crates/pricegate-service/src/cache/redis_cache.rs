//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use pricegate_core::{PricegateError, PricegateResult};
use shaku::Component;
use std::time::Duration;
use tracing::debug;

/// TTL assigned to every cached price (30 seconds).
pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(30);

/// Redis-based cache service.
///
/// Holds the process-wide connection pool. A service built with
/// [`RedisCacheService::disabled`] always misses and never writes.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Pool>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Build a pool for `url` and wrap it.
    ///
    /// Connections are opened lazily, so an unreachable server is not an
    /// error here.
    pub fn from_url(url: &str, pool_size: usize) -> PricegateResult<Self> {
        create_pool(url, pool_size).map(Self::new)
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Returns the underlying pool, if enabled.
    #[must_use]
    pub fn pool(&self) -> Option<&Pool> {
        self.pool.as_ref()
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> PricegateResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                PricegateError::cache_unavailable(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(PricegateError::cache_unavailable("Cache is disabled")),
        }
    }
}

/// Create a Redis connection pool.
pub fn create_pool(url: &str, pool_size: usize) -> PricegateResult<Pool> {
    debug!("Creating Redis connection pool (max_size = {})", pool_size);

    Config::from_url(url)
        .builder()
        .map_err(|e| PricegateError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(pool_size)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| PricegateError::Configuration(format!("Failed to create Redis pool: {}", e)))
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> PricegateResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            PricegateError::cache_unavailable(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PricegateResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        // SET EX rejects 0
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
            PricegateError::cache_unavailable(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> PricegateResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            PricegateError::cache_unavailable(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> PricegateResult<()> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map_err(|e| PricegateError::cache_unavailable(format!("PING failed: {}", e)))?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}
