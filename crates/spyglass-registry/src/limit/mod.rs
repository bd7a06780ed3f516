//! Client-side request throttling
//!
//! A sliding-window throttle that admits at most `max_requests` calls
//! per window. Only admitted requests are recorded, so denied calls
//! never extend the wait. Denials surface as a rate-limit error with a
//! precise wait hint, which lets the retry policy treat a local
//! throttle exactly like a server-sent 429.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[cfg(test)]
mod tests;

/// Requests admitted per window by default
pub const DEFAULT_MAX_REQUESTS: usize = 30;

/// Default sliding window length
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Configuration for the sliding-window throttle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Maximum requests admitted inside one window
    pub max_requests: usize,
    /// Window length
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            window: DEFAULT_WINDOW,
        }
    }
}

/// Sliding-window request throttle
#[derive(Debug)]
pub struct RequestThrottle {
    config: ThrottleConfig,
    admitted: Mutex<VecDeque<Instant>>,
}

impl RequestThrottle {
    /// Create a throttle with the given window configuration
    pub fn new(config: ThrottleConfig) -> Self {
        let capacity = config.max_requests;
        Self {
            config,
            admitted: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Admit a request, or report how long until the window frees up
    pub fn acquire(&self) -> Result<(), Duration> {
        let now = Instant::now();
        let mut admitted = self.admitted.lock();

        while let Some(oldest) = admitted.front() {
            if now.duration_since(*oldest) >= self.config.window {
                admitted.pop_front();
            } else {
                break;
            }
        }

        if admitted.len() < self.config.max_requests {
            admitted.push_back(now);
            return Ok(());
        }

        let wait = match admitted.front() {
            Some(oldest) => (*oldest + self.config.window).saturating_duration_since(now),
            None => self.config.window,
        };
        Err(wait)
    }

    /// Requests currently counted against the window
    pub fn in_flight(&self) -> usize {
        let now = Instant::now();
        let admitted = self.admitted.lock();
        admitted
            .iter()
            .filter(|instant| now.duration_since(**instant) < self.config.window)
            .count()
    }
}
