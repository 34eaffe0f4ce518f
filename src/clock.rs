//! # Clock Source
//!
//! Every time-dependent rule (booking window, code expiry) reads "now" through
//! the [`Clock`] trait so that tests can pin or advance time explicitly.
//!
//! Times are local wall-clock values ([`NaiveDateTime`]): the booking cutoff is
//! defined as an hour of the local day, not as a UTC instant.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex, PoisonError};

/// Supplies the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the operating system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and advance
/// the time seen by sessions holding another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_returns_given_instant() {
        let clock = FixedClock::new(nine_am());
        assert_eq!(clock.now(), nine_am());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_clones_share_advances() {
        let clock = FixedClock::new(nine_am());
        let seen_by_session: Arc<dyn Clock> = Arc::new(clock.clone());

        clock.advance(Duration::minutes(31));
        assert_eq!(seen_by_session.now(), nine_am() + Duration::minutes(31));

        clock.set(nine_am());
        assert_eq!(seen_by_session.now(), nine_am());
    }
}
