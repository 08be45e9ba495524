//! Price service trait definition.

use crate::dto::LookupResult;
use async_trait::async_trait;
use pricegate_core::{Interface, PricegateResult, ProductId};

/// Cache-aside price lookup.
#[async_trait]
pub trait PriceService: Interface + Send + Sync {
    /// Returns the price for a product, from the cache when present.
    ///
    /// On a miss the price is fetched from the source and written to the
    /// cache. The `source` field of the result reports which path was taken.
    async fn resolve(&self, id: ProductId) -> PricegateResult<LookupResult>;

    /// Removes any cached price for a product.
    ///
    /// Succeeds whether or not an entry existed, and also when the cache
    /// store cannot be reached.
    async fn invalidate(&self, id: ProductId) -> PricegateResult<()>;
}
