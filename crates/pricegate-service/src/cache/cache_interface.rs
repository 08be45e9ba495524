//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use pricegate_core::PricegateResult;
use shaku::Interface;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache backends.
///
/// Values are plain strings; store failures are reported as
/// [`PricegateError::CacheUnavailable`](pricegate_core::PricegateError::CacheUnavailable).
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> PricegateResult<Option<String>>;

    /// Set a raw value in the cache with a TTL, replacing any previous value.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PricegateResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> PricegateResult<bool>;

    /// Round-trip to the store to check it is reachable.
    async fn ping(&self) -> PricegateResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}
