//! Repository trait definitions.

use async_trait::async_trait;
use pricegate_core::{Interface, Price, PricegateResult, ProductId};

/// Authoritative source of product prices.
///
/// Implementations may be slow. Callers never retry; a failure is
/// reported as [`PricegateError::SourceUnavailable`].
///
/// [`PricegateError::SourceUnavailable`]: pricegate_core::PricegateError::SourceUnavailable
#[async_trait]
pub trait PriceRepository: Interface + Send + Sync {
    /// Fetches the current price for a product.
    async fn fetch_price(&self, id: ProductId) -> PricegateResult<Price>;
}
