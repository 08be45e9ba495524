//! Integration tests for the product price endpoints.

mod common;

use common::{app, app_with, send, BrokenCache, UnavailableSource};
use pricegate_repository::SimulatedPriceRepository;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_root_reports_running() {
    let (app, _cache) = app();

    let (status, body) = send(&app, "GET", "/").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!("API is running..."));
}

#[tokio::test]
async fn test_lookup_scenario_for_product_7() {
    let (app, cache) = app();

    let (status, body) = send(&app, "GET", "/product/7").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "ProductId": 7, "Price": "107.00", "Source": "Database (now cached)" })
    );
    assert_eq!(cache.get("product:7:price").as_deref(), Some("107.00"));

    let (status, body) = send(&app, "GET", "/product/7").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "ProductId": 7, "Price": "107.00", "Source": "Redis Cache" }));

    let (status, body) = send(&app, "DELETE", "/product/7/cache").await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "ProductId": 7, "Message": "Cache cleared for product 7" })
    );
    assert!(cache.get("product:7:price").is_none());

    let (_, body) = send(&app, "GET", "/product/7").await;
    assert_eq!(body["Source"], "Database (now cached)");
    assert_eq!(body["Price"], "107.00");
}

#[tokio::test]
async fn test_invalidate_unknown_product_succeeds() {
    let (app, _cache) = app();

    let (status, body) = send(&app, "DELETE", "/product/12345/cache").await;

    assert_eq!(status, 200);
    assert_eq!(body["Message"], "Cache cleared for product 12345");
}

#[tokio::test]
async fn test_negative_ids_are_valid() {
    let (app, _cache) = app();

    let (status, body) = send(&app, "GET", "/product/-5").await;

    assert_eq!(status, 200);
    assert_eq!(body["ProductId"], -5);
    assert_eq!(body["Price"], "95.00");
}

#[tokio::test]
async fn test_non_integer_id_is_rejected() {
    let (app, cache) = app();

    for uri in ["/product/abc", "/product/1.5", "/product/99999999999999999999"] {
        let (status, body) = send(&app, "GET", uri).await;
        assert_eq!(status, 400, "{uri}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (status, body) = send(&app, "DELETE", "/product/abc/cache").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert!(cache.get("product:abc:price").is_none());
}

#[tokio::test]
async fn test_source_failure_returns_503() {
    let cache = Arc::new(common::InMemoryCache::default());
    let app = app_with(Arc::new(UnavailableSource), cache.clone());

    let (status, body) = send(&app, "GET", "/product/7").await;

    assert_eq!(status, 503);
    assert_eq!(body["code"], "SOURCE_UNAVAILABLE");
    assert!(body.get("Price").is_none());
    assert!(cache.get("product:7:price").is_none());
}

#[tokio::test]
async fn test_cache_outage_is_invisible_to_clients() {
    let source = Arc::new(SimulatedPriceRepository::new(Duration::ZERO, 100));
    let app = app_with(source, Arc::new(BrokenCache));

    let (status, body) = send(&app, "GET", "/product/7").await;
    assert_eq!(status, 200);
    assert_eq!(body["Source"], "Database (now cached)");
    assert_eq!(body["Price"], "107.00");

    let (status, _) = send(&app, "DELETE", "/product/7/cache").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _cache) = app();

    let (status, _) = send(&app, "GET", "/products/7").await;

    assert_eq!(status, 404);
}
