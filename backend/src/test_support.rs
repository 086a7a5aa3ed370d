//! Test utilities shared by unit and integration tests.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

/// Clock that advances by one second every time it is read.
///
/// Rows created back to back get strictly increasing timestamps, which keeps
/// newest-first orderings deterministic.
pub struct StepClock(Mutex<DateTime<Utc>>);

impl StepClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(Mutex::new(start))
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let current = *now;
        *now += TimeDelta::seconds(1);
        current
    }
}
