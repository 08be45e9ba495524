//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! Prices are stored as canonical decimal strings under `product:<id>:price`.

mod cache_interface;
pub mod cache_keys;
mod health;
mod redis_cache;

pub use cache_interface::CacheInterface;
pub use health::CacheHealthCheck;
pub use redis_cache::{create_pool, RedisCacheService, RedisCacheServiceParameters, DEFAULT_PRICE_TTL};
