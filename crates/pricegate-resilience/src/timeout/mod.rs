//! Timeout wrapper for async operations.

use pricegate_core::PricegateError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Wraps an async operation with a timeout.
pub async fn with_timeout<F, Fut, T>(duration: Duration, f: F) -> Result<T, PricegateError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, PricegateError>>,
{
    tokio::time::timeout(duration, f()).await.map_err(|_| {
        warn!("Operation timed out after {:?}", duration);
        PricegateError::Timeout(format!("Operation timed out after {:?}", duration))
    })?
}

/// Like [`with_timeout`], but runs the operation unbounded when `duration` is `None`.
pub async fn with_optional_timeout<F, Fut, T>(duration: Option<Duration>, f: F) -> Result<T, PricegateError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, PricegateError>>,
{
    match duration {
        Some(duration) => with_timeout(duration, f).await,
        None => f().await,
    }
}
