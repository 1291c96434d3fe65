//! Injectable timer source for the typewriter reveal.

use async_trait::async_trait;
use std::time::Duration;

/// Default delay between revealed characters.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(20);

/// One tick of the reveal cadence. The reveal driver awaits a tick before
/// every step, so tests can substitute an implementation that resolves
/// immediately and single-step without real time passing.
#[async_trait]
pub trait Cadence: Send + Sync {
    async fn tick(&self);
}

/// Production cadence: one tick per fixed wall-clock period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

#[async_trait]
impl Cadence for Interval {
    async fn tick(&self) {
        tokio::time::sleep(self.period).await;
    }
}

/// Cadence that never waits. Used by tests and headless transcript replay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait]
impl Cadence for Immediate {
    async fn tick(&self) {}
}
