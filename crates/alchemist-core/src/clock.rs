//! Clock abstraction for determinism.

use chrono::{DateTime, NaiveTime, Utc};

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns midnight (UTC) of the current day.
    ///
    /// Daily limits are counted from this instant.
    fn start_of_day(&self) -> DateTime<Utc> {
        self.now()
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct At(DateTime<Utc>);

    impl Clock for At {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_start_of_day_truncates_to_utc_midnight() {
        let clock = At(Utc.with_ymd_and_hms(2026, 3, 4, 17, 45, 12).unwrap());

        assert_eq!(
            clock.start_of_day(),
            Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_start_of_day_at_midnight_is_identity() {
        let midnight = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();

        assert_eq!(At(midnight).start_of_day(), midnight);
    }
}
