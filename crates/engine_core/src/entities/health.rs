// crates/engine_core/src/entities/health.rs
use crate::capabilities::Healthable;

/// Hit points. `heal` never exceeds `max`; damage floors at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn new(current: u32, max: u32) -> Self {
        Self { current: current.min(max), max }
    }
}

impl Healthable for Health {
    fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    fn is_alive(&self) -> bool {
        self.current > 0
    }

    fn health(&self) -> u32 {
        self.current
    }

    fn max_health(&self) -> u32 {
        self.max
    }
}
