use std::cell::Cell;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Source of monotonic time in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time measured from when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to. Used by the headless runner and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Fires once at least `interval` seconds have passed since it last fired.
///
/// The same primitive paces simulation ticks and times both power-up windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalTrigger {
    interval: f64,
    last_fired: f64,
}

impl IntervalTrigger {
    /// A trigger whose first window starts at `now`.
    pub fn new(interval: f64, now: f64) -> Self {
        Self {
            interval,
            last_fired: now,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn last_fired(&self) -> f64 {
        self.last_fired
    }

    /// Whether the interval has elapsed, without consuming it.
    pub fn has_elapsed(&self, now: f64) -> bool {
        now - self.last_fired >= self.interval
    }

    /// Returns true and restarts the window at `now` if the interval elapsed.
    pub fn fire(&mut self, now: f64) -> bool {
        if self.has_elapsed(now) {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// Restart the window at `now` without firing.
    pub fn rearm(&mut self, now: f64) {
        self.last_fired = now;
    }
}
