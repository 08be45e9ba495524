//! Result type aliases for Pricegate.

use crate::PricegateError;

/// A specialized `Result` type for Pricegate operations.
pub type PricegateResult<T> = Result<T, PricegateError>;
