//! Dependency injection module using Shaku.
//!
//! `PricegateModule` wires the price source, the Redis cache and the
//! cache-aside service into one container. Components are resolved as
//! `Arc<dyn Trait>`, so tests can assemble the same graph with other
//! parameters.

use deadpool_redis::Pool;
use pricegate_config::AppConfig;
use pricegate_core::{module, PricegateResult};
use pricegate_repository::{PriceRepository, SimulatedPriceRepository, SimulatedPriceRepositoryParameters};
use pricegate_service::{
    create_pool, CacheInterface, CachedPriceService, CachedPriceServiceParameters, InFlightFetches,
    PriceService, RedisCacheService, RedisCacheServiceParameters, ResolverOptions,
};
use shaku::HasComponent;
use std::sync::Arc;
use tracing::{info, warn};

module! {
    pub PricegateModule {
        components = [
            RedisCacheService,
            SimulatedPriceRepository,
            CachedPriceService,
        ],
        providers = [],
    }
}

/// Creates the Redis pool described by `config`, or `None` when Redis is disabled.
pub fn create_cache_pool(config: &AppConfig) -> PricegateResult<Option<Pool>> {
    if !config.redis.enabled {
        warn!("Redis disabled, every lookup will reach the price source");
        return Ok(None);
    }

    let pool = create_pool(&config.redis.url, config.redis.pool_size)?;
    info!("Redis pool created for {}", config.redis.url);
    Ok(Some(pool))
}

/// Resolver options derived from the cache and source sections.
#[must_use]
pub fn resolver_options(config: &AppConfig) -> ResolverOptions {
    ResolverOptions {
        ttl: config.cache.ttl(),
        single_flight: config.cache.single_flight,
        source_timeout: config.source.timeout(),
    }
}

/// Builds the module from configuration and an optional cache pool.
///
/// The pool is passed in rather than created here so the caller keeps a
/// handle to close it on shutdown.
#[must_use]
pub fn build_module(config: &AppConfig, pool: Option<Pool>) -> Arc<PricegateModule> {
    let module = PricegateModule::builder()
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters { pool })
        .with_component_parameters::<SimulatedPriceRepository>(SimulatedPriceRepositoryParameters {
            latency: config.source.latency(),
            base_price: config.source.base_price,
        })
        .with_component_parameters::<CachedPriceService>(CachedPriceServiceParameters {
            options: resolver_options(config),
            in_flight: InFlightFetches::new(),
        })
        .build();

    Arc::new(module)
}

// ============================================================================
// Service Resolution Traits
// ============================================================================

/// Trait for resolving the price service from a module.
pub trait ServiceResolver {
    fn price_service(&self) -> Arc<dyn PriceService>;
}

impl ServiceResolver for PricegateModule {
    fn price_service(&self) -> Arc<dyn PriceService> {
        self.resolve()
    }
}

/// Trait for resolving infrastructure components from a module.
pub trait InfrastructureResolver {
    fn cache(&self) -> Arc<dyn CacheInterface>;

    fn price_repository(&self) -> Arc<dyn PriceRepository>;
}

impl InfrastructureResolver for PricegateModule {
    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }

    fn price_repository(&self) -> Arc<dyn PriceRepository> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricegate_core::ProductId;
    use pricegate_service::PriceSource;
    use std::time::Duration;

    fn offline_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config.source.latency_ms = 0;
        config
    }

    #[test]
    fn test_has_component_trait_bounds() {
        fn _assert_has_price_service<T: HasComponent<dyn PriceService>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}
        fn _assert_has_repository<T: HasComponent<dyn PriceRepository>>() {}

        _assert_has_price_service::<PricegateModule>();
        _assert_has_cache::<PricegateModule>();
        _assert_has_repository::<PricegateModule>();
    }

    #[test]
    fn test_resolver_options_follow_config() {
        let mut config = AppConfig::default();
        config.cache.ttl_secs = 45;
        config.cache.single_flight = true;
        config.source.timeout_secs = Some(2);

        let options = resolver_options(&config);
        assert_eq!(options.ttl, Duration::from_secs(45));
        assert!(options.single_flight);
        assert_eq!(options.source_timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_disabled_redis_creates_no_pool() {
        let pool = create_cache_pool(&offline_config()).unwrap();
        assert!(pool.is_none());
    }

    #[tokio::test]
    async fn test_module_resolves_prices_without_cache() {
        let module = build_module(&offline_config(), None);
        assert!(!module.cache().is_enabled());

        let service = module.price_service();
        let first = service.resolve(ProductId::new(7)).await.unwrap();
        assert_eq!(first.price, "107.00");
        assert_eq!(first.source, PriceSource::FreshlyFetched);

        // Nothing is cached, so the next lookup goes to the source again
        let second = service.resolve(ProductId::new(7)).await.unwrap();
        assert_eq!(second.source, PriceSource::FreshlyFetched);

        service.invalidate(ProductId::new(7)).await.unwrap();
    }

    #[tokio::test]
    async fn test_module_uses_configured_base_price() {
        let mut config = offline_config();
        config.source.base_price = 1_000;
        let module = build_module(&config, None);

        let price = module.price_repository().fetch_price(ProductId::new(5)).await.unwrap();
        assert_eq!(price.encode(), "1005.00");
    }

    #[tokio::test]
    async fn test_module_with_pool_reports_cache_enabled() {
        let mut config = offline_config();
        config.redis.enabled = true;
        config.redis.url = "redis://127.0.0.1:1".to_string();

        let pool = create_cache_pool(&config).unwrap();
        assert!(pool.is_some());

        let module = build_module(&config, pool);
        assert!(module.cache().is_enabled());

        // Unreachable cache still serves from the source
        let result = module.price_service().resolve(ProductId::new(1)).await.unwrap();
        assert_eq!(result.price, "101.00");
    }
}
