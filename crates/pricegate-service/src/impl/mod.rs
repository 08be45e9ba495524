//! Price service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `price_service.rs`).

pub mod cached_price_service;

pub use cached_price_service::{CachedPriceService, CachedPriceServiceParameters, ResolverOptions};
