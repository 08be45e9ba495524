//! Data transfer objects returned by the service layer.

mod price_dto;

pub use price_dto::*;
