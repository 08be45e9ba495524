//! # Pricegate Resilience
//!
//! Resilience patterns for Pricegate.
//! Provides the timeout wrapper used around the price source.

pub mod timeout;

pub use timeout::*;
