//! Token-bucket rate limiting for the index route.
//!
//! One bucket is shared by every client. The limiter is built once at
//! startup and handed to the router; clones share the same bucket.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use parking_lot::Mutex;
use tracing::warn;

use super::error::AppError;

/// Default sustained rate, in tokens per second.
pub const DEFAULT_REFILL_PER_SEC: f64 = 1.0;
/// Default bucket capacity.
pub const DEFAULT_BURST: u32 = 3;

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl Bucket {
    /// Credit the tokens earned since the last refill, capped at `capacity`,
    /// then try to take one.
    fn refill_and_try_consume(&mut self, now: Instant, capacity: f64, refill_per_sec: f64) -> bool {
        let elapsed = now.saturating_duration_since(self.last_refill);
        self.tokens = (self.tokens + elapsed.as_secs_f64() * refill_per_sec).min(capacity);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// A single global token bucket.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<Bucket>>,
    capacity: f64,
    refill_per_sec: f64,
}

impl RateLimiter {
    /// Create a limiter that starts full with `burst` tokens and refills at
    /// `refill_per_sec`.
    pub fn new(refill_per_sec: f64, burst: u32) -> Self {
        let capacity = f64::from(burst);
        Self {
            bucket: Arc::new(Mutex::new(Bucket {
                tokens: capacity,
                last_refill: Instant::now(),
            })),
            capacity,
            refill_per_sec: refill_per_sec.max(0.0),
        }
    }

    /// Take one token if available.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> bool {
        self.bucket
            .lock()
            .refill_and_try_consume(now, self.capacity, self.refill_per_sec)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REFILL_PER_SEC, DEFAULT_BURST)
    }
}

/// Middleware rejecting requests with 429 once the bucket is empty.
///
/// Runs before method routing, so throttled requests are rejected whatever
/// their method.
pub async fn enforce(State(limiter): State<RateLimiter>, request: Request, next: Next) -> Response {
    if !limiter.try_acquire() {
        warn!(
            action = "rate_limit",
            status = "rejected",
            method = %request.method(),
            path = %request.uri().path(),
            "Rate limit exceeded"
        );
        return AppError::RateLimited.into_response();
    }

    next.run(request).await
}
