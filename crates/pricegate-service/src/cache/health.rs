//! Cache health check.

use super::CacheInterface;
use async_trait::async_trait;
use pricegate_core::{HealthCheck, HealthStatus};
use std::sync::Arc;

/// Reports whether the cache store answers a ping.
///
/// A disabled cache is `Degraded`; lookups still work, they just always
/// reach the source.
pub struct CacheHealthCheck {
    cache: Arc<dyn CacheInterface>,
}

impl CacheHealthCheck {
    #[must_use]
    pub fn new(cache: Arc<dyn CacheInterface>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl HealthCheck for CacheHealthCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthStatus {
        if !self.cache.is_enabled() {
            return HealthStatus::Degraded("cache disabled".to_string());
        }

        match self.cache.ping().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
