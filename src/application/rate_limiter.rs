//! Rate limiter module for controlling API request rates
//!
//! Uses the `governor` crate to keep request rates inside the IG Markets
//! API allowances, with a process-wide limiter for unauthenticated login
//! calls.

use crate::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use once_cell::sync::Lazy;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token-bucket rate limiter for API requests
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let period = Duration::from_secs(config.period_seconds);

        let burst_size = NonZeroU32::new(config.burst_size)
            .unwrap_or_else(|| NonZeroU32::new(10).expect("10 is non-zero"));

        let quota = Quota::with_period(period)
            .expect("Valid period")
            .allow_burst(burst_size);

        let limiter = GovernorRateLimiter::direct(quota);

        Self {
            limiter: Arc::new(limiter),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Checks if a request can be made immediately without waiting
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

static LOGIN_LIMITER: Lazy<RateLimiter> = Lazy::new(|| {
    RateLimiter::new(&RateLimiterConfig {
        max_requests: 10,
        period_seconds: 60,
        burst_size: 3,
    })
});

/// Process-wide limiter shared by unauthenticated login calls
pub fn login_limiter() -> &'static RateLimiter {
    &LOGIN_LIMITER
}
