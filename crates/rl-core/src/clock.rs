//! Session time base.
//!
//! The engine never reads wall time directly; it asks a [`Clock`] for a
//! monotonic offset from an arbitrary epoch. Production code uses
//! [`SystemClock`], tests drive a [`ManualClock`] by hand.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Monotonic time source.
pub trait Clock: Send {
    /// Time elapsed since the clock's own epoch.
    fn now(&self) -> Duration;
}

/// Clock backed by [`Instant`], anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle and give another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.nanos.fetch_add(dt.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }

    /// Jump to an absolute time since the epoch.
    pub fn set(&self, t: Duration) {
        self.nanos.store(t.as_nanos() as u64, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Relaxed))
    }
}
