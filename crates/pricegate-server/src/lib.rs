//! # Pricegate Server Library
//!
//! Dependency injection wiring and startup helpers for the Pricegate
//! server binary.

pub mod di;
pub mod startup;
