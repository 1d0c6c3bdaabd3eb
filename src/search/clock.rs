//! Time sources and deadlines for bounded search
//!
//! The search never reads the system time directly. It asks a [`Clock`],
//! so tests can drive time by hand.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

/// Clock that moves forward by a fixed step on every reading.
#[derive(Debug, Clone)]
pub struct StepClock {
    base: Instant,
    step: Duration,
    reads: Cell<u32>,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            base: Instant::now(),
            step,
            reads: Cell::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let n = self.reads.get();
        self.reads.set(n + 1);
        self.base + self.step * n
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Absolute instant after which a search stops recursing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// `None` when `start + limit` overflows; such a deadline is never reached
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline `limit` after `start`.
    #[inline]
    pub fn after(start: Instant, limit: Duration) -> Self {
        Self {
            at: start.checked_add(limit),
        }
    }

    /// A deadline that never fires
    #[inline]
    pub fn never() -> Self {
        Self { at: None }
    }

    #[inline]
    pub fn is_reached<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        match self.at {
            Some(at) => clock.now() >= at,
            None => false,
        }
    }
}
