//! Shared retry policy for registry requests
//!
//! Every request path in this crate runs through one `RetryPolicy`
//! instance, so backoff behavior is defined (and testable) in exactly
//! one place. The policy keeps a single attempt counter for the whole
//! sequence: a timeout that follows a rate-limit response still counts
//! against the same budget instead of restarting it.

use std::time::Duration;

use tracing::warn;

use spyglass_core::error::ExplorerError;
use crate::RegistryResult;


/// Retry attempts after the initial request
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Base delay between attempts
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(800);

/// Configuration for retrying transient registry failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of re-attempts after the initial request
    pub max_retries: u32,
    /// Base delay; rate limits scale it per attempt, other transient
    /// failures wait it flat
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit limits
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Delay to wait before re-attempting after `error`, where
    /// `attempt` is the zero-based attempt that just failed.
    ///
    /// Rate limits honor the server's Retry-After hint when present and
    /// otherwise back off progressively; all other transient failures
    /// wait the flat base delay.
    pub fn delay_for(&self, error: &ExplorerError, attempt: u32) -> Duration {
        match error {
            ExplorerError::RateLimited {
                retry_after: Some(hint),
            } => *hint,
            ExplorerError::RateLimited { retry_after: None } => self.base_delay * (attempt + 1),
            _ => self.base_delay,
        }
    }

    /// Execute `operation` under this policy, re-attempting transient
    /// failures until the budget runs out. Non-retryable errors and the
    /// last error of an exhausted budget surface unchanged.
    pub async fn run<F, Fut, T>(&self, operation: F) -> RegistryResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = RegistryResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !error.is_retryable() || attempt >= self.max_retries {
                        return Err(error);
                    }

                    let delay = self.delay_for(&error, attempt);
                    warn!(
                        "Retrying registry request ({}/{}) in {:?}: {}",
                        attempt + 1,
                        self.max_retries,
                        delay,
                        error
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
