//! Cache-aside price service implementation.

use crate::cache::{cache_keys, CacheInterface, DEFAULT_PRICE_TTL};
use crate::dto::LookupResult;
use crate::price_service::PriceService;
use crate::single_flight::InFlightFetches;
use async_trait::async_trait;
use pricegate_core::{Price, PricegateError, PricegateResult, ProductId};
use pricegate_repository::PriceRepository;
use pricegate_resilience::with_optional_timeout;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Tuning for the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// TTL written with every cached price.
    pub ttl: Duration,
    /// Collapse concurrent misses for one product into a single fetch.
    pub single_flight: bool,
    /// Upper bound on a source fetch. `None` waits as long as the source takes.
    pub source_timeout: Option<Duration>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_PRICE_TTL,
            single_flight: false,
            source_timeout: None,
        }
    }
}

/// Cache-aside price service.
#[derive(Component)]
#[shaku(interface = PriceService)]
pub struct CachedPriceService {
    #[shaku(inject)]
    price_repository: Arc<dyn PriceRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    options: ResolverOptions,
    in_flight: InFlightFetches,
}

impl CachedPriceService {
    /// Creates a new `CachedPriceService`.
    #[must_use]
    pub fn new(
        price_repository: Arc<dyn PriceRepository>,
        cache: Arc<dyn CacheInterface>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            price_repository,
            cache,
            options,
            in_flight: InFlightFetches::new(),
        }
    }

    /// Returns the resolver options.
    #[must_use]
    pub const fn options(&self) -> &ResolverOptions {
        &self.options
    }

    async fn lookup_cached(&self, key: &str) -> Option<String> {
        match self.cache.get_raw(key).await {
            Ok(Some(cached)) => Some(cached),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Cache read failed for '{}', treating as miss", key);
                None
            }
        }
    }
}

/// Fetches from the source and writes the result to the cache.
///
/// Owns its inputs so the future can be shared between callers.
async fn fetch_and_populate(
    price_repository: Arc<dyn PriceRepository>,
    cache: Arc<dyn CacheInterface>,
    id: ProductId,
    key: String,
    options: ResolverOptions,
) -> PricegateResult<Price> {
    let price = with_optional_timeout(options.source_timeout, || price_repository.fetch_price(id))
        .await
        .map_err(|e| {
            error!(error = %e, "Price source failed for product {}", id);
            match e {
                PricegateError::SourceUnavailable(_) => e,
                other => PricegateError::source_unavailable(other.to_string()),
            }
        })?;

    if let Err(e) = cache.set_raw(&key, &price.encode(), options.ttl).await {
        warn!(error = %e, "Cache write failed for '{}', continuing without caching", key);
    }

    Ok(price)
}

#[async_trait]
impl PriceService for CachedPriceService {
    #[instrument(skip(self))]
    async fn resolve(&self, id: ProductId) -> PricegateResult<LookupResult> {
        let key = cache_keys::product_price(id);

        if let Some(cached) = self.lookup_cached(&key).await {
            debug!("Cache hit for product {}", id);
            return Ok(LookupResult::cache_hit(id, cached));
        }

        debug!("Cache miss for product {}, fetching from source", id);

        let fetch = || {
            fetch_and_populate(
                Arc::clone(&self.price_repository),
                Arc::clone(&self.cache),
                id,
                key,
                self.options,
            )
        };

        let price = if self.options.single_flight {
            self.in_flight.run(id, fetch).await?
        } else {
            fetch().await?
        };

        Ok(LookupResult::freshly_fetched(id, price))
    }

    #[instrument(skip(self))]
    async fn invalidate(&self, id: ProductId) -> PricegateResult<()> {
        let key = cache_keys::product_price(id);

        match self.cache.delete(&key).await {
            Ok(existed) => debug!("Invalidated '{}' (existed: {})", key, existed),
            Err(e) => warn!(error = %e, "Cache delete failed for '{}', ignoring", key),
        }

        Ok(())
    }
}

impl std::fmt::Debug for CachedPriceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedPriceService")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
