//! Application state for Axum handlers.

use pricegate_core::HealthCheck;
use pricegate_service::{CacheHealthCheck, CacheInterface, PriceService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub price_service: Arc<dyn PriceService>,
    pub cache_health: Arc<dyn HealthCheck>,
    pub version: &'static str,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(price_service: Arc<dyn PriceService>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            price_service,
            cache_health: Arc::new(CacheHealthCheck::new(cache)),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Resolves the services this state needs from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn PriceService> + HasComponent<dyn CacheInterface>,
    {
        let price_service: Arc<dyn PriceService> = module.resolve();
        let cache: Arc<dyn CacheInterface> = module.resolve();
        Self::new(price_service, cache)
    }
}
