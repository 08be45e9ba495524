//! Product price controller.

use crate::{
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Router,
};
use pricegate_core::{PricegateError, ProductId};
use pricegate_service::{CacheClearedResponse, LookupResult};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_product_price))
        .route("/:id/cache", delete(invalidate_product_cache))
}

/// Look up a product's price, serving from cache when possible.
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Price found", body = LookupResult),
        (status = 400, description = "Identifier is not an integer", body = pricegate_core::ErrorResponse),
        (status = 503, description = "Price source unavailable", body = pricegate_core::ErrorResponse)
    )
)]
pub async fn get_product_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LookupResult> {
    debug!("Get price request: {}", id);

    let product_id = parse_product_id(&id)?;
    let result = state.price_service.resolve(product_id).await?;
    ok(result)
}

/// Remove a product's cached price.
#[utoipa::path(
    delete,
    path = "/product/{id}/cache",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Cache entry removed or was already absent", body = CacheClearedResponse),
        (status = 400, description = "Identifier is not an integer", body = pricegate_core::ErrorResponse)
    )
)]
pub async fn invalidate_product_cache(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CacheClearedResponse> {
    debug!("Invalidate cache request: {}", id);

    let product_id = parse_product_id(&id)?;
    state.price_service.invalidate(product_id).await?;
    ok(CacheClearedResponse::new(product_id))
}

/// Helper to parse product ID from path parameter.
fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(PricegateError::Validation(format!("Invalid product ID: {}", id))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("7").unwrap(), ProductId::new(7));
        assert_eq!(parse_product_id("-1").unwrap(), ProductId::new(-1));

        let err = parse_product_id("abc").unwrap_err();
        assert!(matches!(err.0, PricegateError::Validation(ref m) if m == "Invalid product ID: abc"));
    }
}
