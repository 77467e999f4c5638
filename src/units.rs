//! Fixed conversion constants, all expressed in seconds.
//!
//! A year is the Julian average of 365.25 days. There is no calendar epoch,
//! so leap years are never resolved individually.

/// Largest acceptable gap between adjacent clock values, in seconds.
pub const TARGET_SPACING: f64 = 0.01;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// Average days in a year, accounting for leap years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in one (average) year.
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn unit_ladder() {
        assert_eq!(3_600.0, SECONDS_PER_HOUR);
        assert_eq!(86_400.0, SECONDS_PER_DAY);
        assert_eq!(31_557_600.0, SECONDS_PER_YEAR);
    }
}
