//! Clock abstraction
//!
//! Deadline enforcement is a point-in-time comparison, so the current time is
//! read through a trait object instead of calling `Utc::now()` inline. The
//! server runs on [`SystemClock`]; tests drive [`ManualClock`].

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a manual clock pinned to the given instant
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Pin the clock to a new instant
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().expect("clock lock poisoned") = now;
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().expect("clock lock poisoned");
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock poisoned")
    }
}
