//! Clock implementations.

use calgrid_domain::DateValue;
use chrono::Local;

use crate::infrastructure::ports::ClockPort;

/// System clock - uses the real local civil time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateValue {
        DateValue::new(Local::now().naive_local())
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateValue);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateValue {
        self.0
    }
}
