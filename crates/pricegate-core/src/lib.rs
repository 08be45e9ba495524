//! # Pricegate Core
//!
//! Core types, traits, and error definitions for Pricegate.
//! This crate provides the foundational abstractions shared by the
//! repository, service, and presentation layers.

pub mod error;
pub mod id;
pub mod price;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use error::*;
pub use id::*;
pub use price::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
