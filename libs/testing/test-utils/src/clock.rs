//! Controllable clock for services that compare against "now".

use std::sync::Mutex;

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc};
use mockable::Clock;

/// Clock frozen at a chosen instant until advanced.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Clock set to a naive timestamp read as UTC
    pub fn at(now: NaiveDateTime) -> Self {
        Self::new(now.and_utc())
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.lock_clock() = now.and_utc();
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.lock_clock() += delta;
    }

    pub fn advance_hours(&self, hours: i64) {
        self.advance(TimeDelta::hours(hours));
    }

    /// Current instant as stored by the services
    pub fn naive(&self) -> NaiveDateTime {
        self.utc().naive_utc()
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Fixed reference instant used across the test suites: 2030-01-01T12:00:00
pub fn reference_time() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}
