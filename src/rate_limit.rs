//! Fixed-interval request pacing for external APIs.

use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Hands out one permit per fixed interval.
///
/// The image-search API is the only throttled call in the system; callers
/// `acquire()` immediately before each request and the limiter sleeps away
/// whatever remains of the interval since the previous permit. The first
/// permit is granted without waiting.
pub struct IntervalLimiter {
    /// Minimum spacing between consecutive permits.
    interval: Duration,
    /// When the previous permit was granted.
    last_permit: Option<Instant>,
}

impl IntervalLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_permit: None,
        }
    }

    /// Wait until the interval since the previous permit has elapsed.
    pub async fn acquire(&mut self) {
        if let Some(last) = self.last_permit {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        self.last_permit = Some(Instant::now());
    }
}
