//! The "current instant" accessor, with the wall clock kept injectable.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};

use crate::factory::InstantFactory;
use crate::instant::Instant;

/// Source of the current UTC time.
///
/// Production wires in [`SystemTimeSource`]; tests substitute
/// [`FixedTimeSource`] for determinism.
pub trait TimeSource: Send + Sync {
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Reads the ambient system clock.
#[cfg(feature = "system-clock")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

#[cfg(feature = "system-clock")]
impl TimeSource for SystemTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable, advance-able time source for deterministic tests.
#[derive(Debug)]
pub struct FixedTimeSource {
    now: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("time source lock poisoned") = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("time source lock poisoned");
        *now += delta;
    }
}

impl TimeSource for FixedTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("time source lock poisoned")
    }
}

/// Composes a [`TimeSource`] with an [`InstantFactory`] into the single
/// accessor application code should reach for.
#[derive(Clone)]
pub struct InstantClock {
    source: Arc<dyn TimeSource>,
    factory: InstantFactory,
}

impl InstantClock {
    pub fn new(source: Arc<dyn TimeSource>, factory: InstantFactory) -> Self {
        Self { source, factory }
    }

    /// A clock over the ambient system time.
    #[cfg(feature = "system-clock")]
    pub fn system(factory: InstantFactory) -> Self {
        Self::new(Arc::new(SystemTimeSource), factory)
    }

    /// The current moment in the factory's bound zone.
    pub fn now(&self) -> Instant {
        self.factory.from_offset(self.source.utc_now().fixed_offset())
    }
}
