//! # Pricegate Service
//!
//! Cache-aside price lookup.
//!
//! [`CachedPriceService`] consults the cache first and only falls back to
//! the authoritative [`PriceRepository`] on a miss, writing the fetched
//! price back with a fixed TTL. Cache failures degrade to a miss and are
//! never surfaced to callers; source failures always are.
//!
//! [`PriceRepository`]: pricegate_repository::PriceRepository

pub mod cache;
pub mod dto;
pub mod price_service;
pub mod single_flight;
pub mod r#impl;

pub use cache::*;
pub use dto::*;
pub use price_service::*;
pub use single_flight::InFlightFetches;
pub use r#impl::{CachedPriceService, CachedPriceServiceParameters, ResolverOptions};
