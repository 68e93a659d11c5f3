//! Reusable retry policy for transport calls.
//!
//! Wraps tokio-retry with a doubling backoff strategy and an error-category
//! predicate: server errors, timeouts, and connectivity failures are retried,
//! client errors fail on the first attempt. The backoff schedule is a plain
//! iterator so tests can inspect it without touching the network.

use crate::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry::RetryIf;
use tracing::{debug, warn};

/// Exponential backoff schedule: `initial`, `initial * 2`, `initial * 4`, ...
pub struct Backoff {
    next: Duration,
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let current = self.next;
        self.next = self.next.saturating_mul(2);
        Some(current)
    }
}

/// Bounded retry budget for one logical transport call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Additional attempts after the first one.
    pub max_retries: usize,
    /// Delay before the first retry; doubles for each retry after that.
    pub initial_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: usize, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// The delays slept between attempts, in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        Backoff {
            next: self.initial_delay,
        }
        .take(self.max_retries)
    }

    /// Run `attempt` up to `max_retries + 1` times, sleeping the backoff
    /// schedule between retryable failures. The last observed error
    /// propagates once the budget is exhausted.
    pub async fn run<A, F, T>(&self, operation: &str, mut attempt: A) -> Result<T>
    where
        A: FnMut() -> F,
        F: Future<Output = Result<T>>,
    {
        let total_attempts = self.max_retries + 1;
        let counter = AtomicUsize::new(0);

        RetryIf::spawn(
            self.delays(),
            || {
                let index = counter.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("{} attempt {}/{}", operation, index, total_attempts);
                let call = attempt();
                async move {
                    match call.await {
                        Ok(value) => {
                            debug!("{} attempt {} succeeded", operation, index);
                            Ok(value)
                        }
                        Err(e) => {
                            warn!("{} attempt {} failed: {}", operation, index, e);
                            Err(e)
                        }
                    }
                }
            },
            |e: &Error| e.is_retryable(),
        )
        .await
    }
}
