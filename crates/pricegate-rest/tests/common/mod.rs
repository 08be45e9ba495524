//! Common test infrastructure for REST integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use pricegate_config::ServerConfig;
use pricegate_core::{Price, PricegateError, PricegateResult, ProductId};
use pricegate_repository::{PriceRepository, SimulatedPriceRepository};
use pricegate_rest::{build_router, AppState};
use pricegate_service::{CacheInterface, CachedPriceService, ResolverOptions};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// In-memory cache standing in for Redis.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    async fn get_raw(&self, key: &str) -> PricegateResult<Option<String>> {
        Ok(self.get(key))
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> PricegateResult<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> PricegateResult<bool> {
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }

    async fn ping(&self) -> PricegateResult<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Cache whose every operation fails.
pub struct BrokenCache;

#[async_trait]
impl CacheInterface for BrokenCache {
    async fn get_raw(&self, _key: &str) -> PricegateResult<Option<String>> {
        Err(PricegateError::cache_unavailable("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> PricegateResult<()> {
        Err(PricegateError::cache_unavailable("connection refused"))
    }

    async fn delete(&self, _key: &str) -> PricegateResult<bool> {
        Err(PricegateError::cache_unavailable("connection refused"))
    }

    async fn ping(&self) -> PricegateResult<()> {
        Err(PricegateError::cache_unavailable("connection refused"))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Source that is always down.
pub struct UnavailableSource;

#[async_trait]
impl PriceRepository for UnavailableSource {
    async fn fetch_price(&self, _id: ProductId) -> PricegateResult<Price> {
        Err(PricegateError::source_unavailable("pricing database offline"))
    }
}

/// Builds a router around the given source and cache.
pub fn app_with(source: Arc<dyn PriceRepository>, cache: Arc<dyn CacheInterface>) -> Router {
    let service = CachedPriceService::new(source, Arc::clone(&cache), ResolverOptions::default());
    let state = AppState::new(Arc::new(service), cache);
    build_router(state, &ServerConfig::default())
}

/// Builds a router with an instant simulated source and an in-memory cache.
pub fn app() -> (Router, Arc<InMemoryCache>) {
    let cache = Arc::new(InMemoryCache::default());
    let source = Arc::new(SimulatedPriceRepository::new(Duration::ZERO, 100));
    (app_with(source, cache.clone()), cache)
}

/// Sends a request and returns the status and parsed JSON body.
pub async fn send(app: &Router, method: &str, uri: &str) -> (u16, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}
