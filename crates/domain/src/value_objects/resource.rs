//! Bounded resource pools (health, mana, stamina)
//!
//! A pool always satisfies `0 <= current <= total`. Every write goes through
//! a clamping setter; out-of-range values are absorbed, never reported.

use serde::{Deserialize, Serialize};

/// A current/total pair for one character resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePool {
    current: i32,
    total: i32,
}

impl ResourcePool {
    /// Create a pool, clamping `current` into `[0, total]`.
    pub fn new(current: i32, total: i32) -> Self {
        let total = total.max(0);
        Self {
            current: current.clamp(0, total),
            total,
        }
    }

    /// A pool filled to its total.
    pub fn full(total: i32) -> Self {
        Self::new(total, total)
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// `max(0, min(value, total))`.
    pub fn set_current(&mut self, value: i32) {
        self.current = value.clamp(0, self.total);
    }

    /// Fractional writes truncate toward zero before clamping.
    pub fn set_current_f64(&mut self, value: f64) {
        if value > f64::from(self.total) {
            self.current = self.total;
        } else if value >= 0.0 {
            self.current = value.trunc() as i32;
        } else {
            self.current = 0;
        }
    }

    /// Change the total. The current value is re-clamped under the new total.
    pub fn set_total(&mut self, total: i32) {
        self.total = total.max(0);
        self.current = self.current.min(self.total);
    }

    pub fn refill(&mut self) {
        self.current = self.total;
    }

    /// Add `amount` (may be negative), clamped.
    pub fn adjust(&mut self, amount: i32) {
        self.set_current(self.current.saturating_add(amount));
    }

    /// Add `fraction * total` to the current value, clamped.
    ///
    /// Returns how much the current value actually moved.
    pub fn restore_fraction(&mut self, fraction: f64) -> i32 {
        let before = self.current;
        self.set_current_f64(f64::from(self.current) + f64::from(self.total) * fraction);
        self.current - before
    }

    /// `round(current / total * 100)`; an empty total reads as 0%.
    pub fn percentage(&self) -> i32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.current) / f64::from(self.total) * 100.0).round() as i32
    }
}
