//! `SimulatedPriceRepository`: a slow stand-in for the pricing database.
//!
//! Every lookup sleeps for the configured latency and then returns
//! `base_price + id` whole units. The delay makes the difference between a
//! cache hit and a source fetch observable from the outside.

use crate::traits::PriceRepository;
use async_trait::async_trait;
use pricegate_core::{Price, PricegateError, PricegateResult, ProductId};
use shaku::Component;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default simulated latency of a source lookup.
pub const DEFAULT_SOURCE_LATENCY: Duration = Duration::from_millis(3000);

/// Default base price added to every product id.
pub const DEFAULT_BASE_PRICE: i64 = 100;

/// Price source that derives a deterministic price after an artificial delay.
#[derive(Component)]
#[shaku(interface = PriceRepository)]
pub struct SimulatedPriceRepository {
    #[shaku(default = DEFAULT_SOURCE_LATENCY)]
    latency: Duration,
    #[shaku(default = DEFAULT_BASE_PRICE)]
    base_price: i64,
}

impl SimulatedPriceRepository {
    /// Creates a repository with the given latency and base price.
    #[must_use]
    pub const fn new(latency: Duration, base_price: i64) -> Self {
        Self { latency, base_price }
    }

    /// Returns the configured latency.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedPriceRepository {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LATENCY, DEFAULT_BASE_PRICE)
    }
}

#[async_trait]
impl PriceRepository for SimulatedPriceRepository {
    #[instrument(skip(self))]
    async fn fetch_price(&self, id: ProductId) -> PricegateResult<Price> {
        debug!("Repository: fetching price for product {}", id);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.base_price
            .checked_add(id.into_inner())
            .and_then(Price::checked_from_units)
            .ok_or_else(|| {
                PricegateError::source_unavailable(format!("price for product {} is out of range", id))
            })
    }
}
