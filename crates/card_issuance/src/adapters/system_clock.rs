// Rust guideline compliant 2026-10-16

//! Wall-clock adapter for the `Clock` port.

use chrono::{DateTime, Local, Timelike as _, Utc};
use domain::Clock;

/// `Clock` adapter reading the system time.
///
/// `now` is UTC; `current_hour` is the host's local hour, which is what a
/// front desk means by "between 9 and 11".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}
