//! Price lookup DTOs.

use pricegate_core::{Price, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a looked-up price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PriceSource {
    /// Served from the cache without touching the source.
    #[serde(rename = "Redis Cache")]
    CacheHit,
    /// Fetched from the source and written to the cache.
    #[serde(rename = "Database (now cached)")]
    FreshlyFetched,
}

/// Result of a price lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LookupResult {
    #[schema(value_type = i64, example = 7)]
    pub product_id: ProductId,

    /// Decimal price with two fractional digits.
    #[schema(example = "107.00")]
    pub price: String,

    pub source: PriceSource,
}

impl LookupResult {
    /// Builds a result for a value read from the cache.
    ///
    /// The cached string is returned as stored.
    #[must_use]
    pub fn cache_hit(product_id: ProductId, cached: String) -> Self {
        Self {
            product_id,
            price: cached,
            source: PriceSource::CacheHit,
        }
    }

    /// Builds a result for a price fetched from the source.
    #[must_use]
    pub fn freshly_fetched(product_id: ProductId, price: Price) -> Self {
        Self {
            product_id,
            price: price.encode(),
            source: PriceSource::FreshlyFetched,
        }
    }
}

/// Response for a cache invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CacheClearedResponse {
    #[schema(value_type = i64, example = 7)]
    pub product_id: ProductId,

    #[schema(example = "Cache cleared for product 7")]
    pub message: String,
}

impl CacheClearedResponse {
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            message: format!("Cache cleared for product {}", product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_result_wire_shape() {
        let fresh = LookupResult::freshly_fetched(ProductId::new(7), Price::from_minor_units(10_700));
        assert_eq!(
            serde_json::to_value(&fresh).unwrap(),
            json!({ "ProductId": 7, "Price": "107.00", "Source": "Database (now cached)" })
        );

        let hit = LookupResult::cache_hit(ProductId::new(7), "107.00".to_string());
        assert_eq!(
            serde_json::to_value(&hit).unwrap(),
            json!({ "ProductId": 7, "Price": "107.00", "Source": "Redis Cache" })
        );
    }

    #[test]
    fn test_cache_cleared_message() {
        let response = CacheClearedResponse::new(ProductId::new(42));
        assert_eq!(response.message, "Cache cleared for product 42");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "ProductId": 42, "Message": "Cache cleared for product 42" })
        );
    }
}
