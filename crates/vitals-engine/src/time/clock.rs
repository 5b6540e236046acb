use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic timestamps, in seconds.
///
/// Hosts feed `PerformanceCalculator::on_frame` with readings from the same
/// clock the calculator uses for `start()`, so both sides agree on the origin.
pub trait Clock {
    /// Current monotonic reading in seconds.
    fn now(&self) -> f64;
}

/// Wall-clock backed clock anchored at construction.
///
/// Readings start near `0.0` and never go backwards.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Re-anchors the clock so the next reading is close to zero.
    pub fn reset(&mut self) {
        self.origin = Instant::now();
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.origin)
            .as_secs_f64()
    }
}

/// Manually driven clock.
///
/// Clones share the same reading, so a test (or a replay host) can keep one
/// handle and hand the other to a calculator.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Sets the current reading.
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    /// Moves the reading forward by `dt` seconds.
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
