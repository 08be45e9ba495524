//! Cache key generators for consistent key naming.

use pricegate_core::ProductId;

/// Generate the cache key holding a product's price.
///
/// The mapping is deterministic and injective over all ids.
#[must_use]
pub fn product_price(id: ProductId) -> String {
    format!("product:{}:price", id)
}
