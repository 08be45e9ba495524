//! Per-product in-flight fetch tracking.
//!
//! When enabled, concurrent misses for the same product share one
//! fetch-and-populate future instead of each reaching the source.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use pricegate_core::{Price, PricegateError, PricegateResult, ProductId};
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

// Shared outputs must be Clone, so errors travel as their message.
type SharedFetch = Shared<BoxFuture<'static, Result<Price, String>>>;

/// Tracks fetches currently running against the price source.
#[derive(Default, Clone)]
pub struct InFlightFetches {
    fetches: Arc<DashMap<ProductId, SharedFetch>>,
}

impl InFlightFetches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `fetch` for `id`, or joins the fetch already running for it.
    ///
    /// The fetch runs on its own task, so it completes and leaves the map even
    /// when every caller is dropped first. Every caller that joins gets the same
    /// outcome. A failure is reported to joiners as `SourceUnavailable` carrying
    /// the original message.
    pub async fn run<F, Fut>(&self, id: ProductId, fetch: F) -> PricegateResult<Price>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PricegateResult<Price>> + Send + 'static,
    {
        let shared = match self.fetches.entry(id) {
            Entry::Occupied(running) => {
                debug!("Joining in-flight fetch for product {}", id);
                running.get().clone()
            }
            Entry::Vacant(vacant) => {
                let fut = fetch();
                let fetches = Arc::clone(&self.fetches);
                let task = tokio::spawn(async move {
                    let _guard = FetchGuard { id, fetches };
                    fut.await
                });
                let shared = async move {
                    match task.await {
                        Ok(result) => result.map_err(|e| match e {
                            PricegateError::SourceUnavailable(message) => message,
                            other => other.to_string(),
                        }),
                        Err(e) => Err(format!("price fetch for product {} did not complete: {}", id, e)),
                    }
                }
                .boxed()
                .shared();
                vacant.insert(shared.clone());
                shared
            }
        };

        shared.await.map_err(PricegateError::SourceUnavailable)
    }

    /// Number of fetches currently running.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fetches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty()
    }
}

impl std::fmt::Debug for InFlightFetches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlightFetches")
            .field("in_flight", &self.fetches.len())
            .finish()
    }
}

/// Removes the map entry once the fetch task finishes or unwinds.
struct FetchGuard {
    id: ProductId,
    fetches: Arc<DashMap<ProductId, SharedFetch>>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.fetches.remove(&self.id);
    }
}
