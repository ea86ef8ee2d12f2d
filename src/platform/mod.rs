//! Platform abstraction layer
//!
//! The two seams the core polls into each tick: held-key input and time.
//! Window creation and raw event pumping live behind `InputSource`; the
//! sim itself never touches either.

use std::thread;
use std::time::{Duration, Instant};

use crate::sim::TickInput;

/// Source of per-tick input: held-key state for the four paddle actions
/// plus the start and quit signals. Polled exactly once per tick; one-shot
/// semantics (key-down edges) are the implementor's concern.
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Monotonic time and blocking waits for tick pacing. The sim keeps its own
/// tick-derived clock; this one belongs to the shell.
pub trait Clock {
    /// Milliseconds since some fixed origin
    fn now_ms(&self) -> u64;
    /// Block the loop thread for the given duration
    fn sleep_ms(&self, ms: u64);
}

/// Native clock over `std::time`
#[derive(Debug)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_clock_is_monotonic() {
        let clock = StdClock::new();
        let a = clock.now_ms();
        clock.sleep_ms(2);
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
