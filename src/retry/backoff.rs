//! Backoff computation and retry bookkeeping

use async_trait::async_trait;
use std::time::Duration;

/// Compute the wait before retry number `attempt` (1-indexed)
///
/// `backoff_factor * 2^(attempt - 1)` seconds: the first retry waits the
/// bare factor, doubling from there.
pub fn wait_duration(backoff_factor: f64, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
    let seconds = backoff_factor * 2f64.powi(exponent);
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Attempt bookkeeping for a single page fetch
///
/// The counter starts at 1; a page is tried at most `max_retries + 1`
/// times. Scoped to one page; each page constructs a fresh state.
#[derive(Debug, Clone)]
pub struct RetryState {
    attempt: u32,
    max_retries: u32,
}

impl RetryState {
    /// Start tracking attempts against the given retry budget
    pub fn new(max_retries: u32) -> Self {
        Self {
            attempt: 1,
            max_retries,
        }
    }

    /// Current attempt number, 1-indexed
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Whether another retry is allowed after the current attempt fails
    pub fn can_retry(&self) -> bool {
        self.attempt <= self.max_retries
    }

    /// Record that a retry is being taken
    pub fn next_attempt(&mut self) {
        self.attempt += 1;
    }
}

/// Pluggable sleep capability used between retry attempts
///
/// Tests stub this to be instantaneous while recording the requested
/// durations.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for the given duration before the next attempt
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by tokio's timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
