//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).
//! This module contains concrete structs that implement those traits.

pub mod simulated_price_repository;

pub use simulated_price_repository::{SimulatedPriceRepository, SimulatedPriceRepositoryParameters};
