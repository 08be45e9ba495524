//! # Pricegate Repository
//!
//! Access to the authoritative price source:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn PriceRepository>   (domain interface)
//! SimulatedPriceRepository        (slow source, `base + id` after a delay)
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                          ← PriceRepository trait
//!   impl/
//!     mod.rs
//!     simulated_price_repository.rs    ← SimulatedPriceRepository
//! ```

pub mod traits;
pub mod r#impl;

pub use traits::*;
pub use r#impl::{SimulatedPriceRepository, SimulatedPriceRepositoryParameters};
