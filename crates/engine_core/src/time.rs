// crates/engine_core/src/time.rs

use std::time::Instant;

/// Monotonic millisecond counter. Only time-driven animation reads it.
pub trait TickSource {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since construction, from `Instant`.
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to. Makes frame selection reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn starting_at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now = self.now.saturating_add(ms);
    }

    pub fn set(&mut self, now: u64) {
        // Never step backwards.
        self.now = self.now.max(now);
    }
}

impl TickSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_is_monotonic() {
        let mut clock = ManualClock::starting_at(100);
        clock.advance(50);
        assert_eq!(clock.now_ms(), 150);
        clock.set(20);
        assert_eq!(clock.now_ms(), 150);
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
