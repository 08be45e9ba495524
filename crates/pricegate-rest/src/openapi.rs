//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use crate::controllers::{ComponentHealth, HealthResponse};
use pricegate_core::{ErrorResponse, ProductId};
use pricegate_service::{CacheClearedResponse, LookupResult, PriceSource};
use utoipa::OpenApi;

/// OpenAPI documentation for the Pricegate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pricegate API",
        version = "1.0.0",
        description = "Cache-aside product price lookup",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Product endpoints
        crate::controllers::product_controller::get_product_price,
        crate::controllers::product_controller::invalidate_product_cache,
        // Health endpoints
        crate::router::root,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            ProductId,
            ErrorResponse,
            // Price DTOs
            LookupResult,
            PriceSource,
            CacheClearedResponse,
            // Health
            HealthResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "products", description = "Product price lookup and cache invalidation"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
