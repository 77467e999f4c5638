use crate::units::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR};
use crate::{Error, Result};

/// A seconds count split into years, days, hours, minutes and seconds.
///
/// Years are 365.25 days long.
///
/// ```
/// use timehorizon::DurationBreakdown;
///
/// let breakdown = DurationBreakdown::from_seconds(90_061.5);
///
/// assert_eq!("0 years, 1 day, 1 hour, 1 minute, 1.50 seconds", breakdown.to_string());
/// assert_eq!("1d 1h 1m 1.50s", format!("{breakdown:#}"));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DurationBreakdown {
    /// Whole years.
    pub years: u64,

    /// Whole days left after the years.
    pub days: u64,

    /// Whole hours left after the days.
    pub hours: u64,

    /// Whole minutes left after the hours.
    pub minutes: u64,

    /// Fractional seconds left after the minutes.
    pub seconds: f64,
}

impl DurationBreakdown {
    /// Greedily extracts whole units, largest first.
    ///
    /// `seconds` must be nonnegative, finite and hold fewer than `2^64` years
    /// (about `5.8e26` seconds), or the year count saturates. See
    /// [`DurationBreakdown::try_from_seconds`] for a checked variant.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_seconds(seconds: f64) -> Self {
        debug_assert!(is_representable(seconds));

        let mut remaining = seconds;
        let mut take = |divisor: f64| {
            let mut count = (remaining / divisor).floor();

            // the quotient can round up onto the next whole unit
            if count * divisor > remaining {
                count -= 1.0;
            }

            remaining -= count * divisor;
            count as u64
        };

        let years = take(SECONDS_PER_YEAR);
        let days = take(SECONDS_PER_DAY);
        let hours = take(SECONDS_PER_HOUR);
        let minutes = take(SECONDS_PER_MINUTE);

        log::trace!("{seconds} s -> {years}y {days}d {hours}h {minutes}m {remaining}s");

        Self {
            years,
            days,
            hours,
            minutes,
            seconds: remaining,
        }
    }

    /// Like [`DurationBreakdown::from_seconds`], but rejects input it is not defined for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDuration`] if `seconds` is negative, NaN, infinite
    /// or too large for the year count.
    pub fn try_from_seconds(seconds: f64) -> Result<Self> {
        if is_representable(seconds) {
            Ok(Self::from_seconds(seconds))
        } else {
            Err(Error::InvalidDuration(seconds))
        }
    }

    /// Sums the components back into seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_seconds(&self) -> f64 {
        self.years as f64 * SECONDS_PER_YEAR
            + self.days as f64 * SECONDS_PER_DAY
            + self.hours as f64 * SECONDS_PER_HOUR
            + self.minutes as f64 * SECONDS_PER_MINUTE
            + self.seconds
    }

    fn write_compact(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = [
            (self.years, 'y'),
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
        ];

        let mut leading = true;
        for (count, suffix) in units {
            if leading && count == 0 {
                continue;
            }
            leading = false;
            write!(f, "{count}{suffix} ")?;
        }

        write!(f, "{:.2}s", self.seconds)
    }
}

#[allow(clippy::cast_precision_loss)]
fn is_representable(seconds: f64) -> bool {
    seconds.is_finite() && seconds >= 0.0 && seconds / SECONDS_PER_YEAR < u64::MAX as f64
}

fn write_count(f: &mut std::fmt::Formatter<'_>, count: u64, unit: &str) -> std::fmt::Result {
    if count == 1 {
        write!(f, "{count} {unit}")
    } else {
        write!(f, "{count} {unit}s")
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            return self.write_compact(f);
        }

        write_count(f, self.years, "year")?;
        f.write_str(", ")?;
        write_count(f, self.days, "day")?;
        f.write_str(", ")?;
        write_count(f, self.hours, "hour")?;
        f.write_str(", ")?;
        write_count(f, self.minutes, "minute")?;
        write!(f, ", {:.2} seconds", self.seconds)
    }
}

/// Formats `n` with a comma between every group of three digits.
///
/// ```
/// assert_eq!("1,427,104", timehorizon::group_thousands(1_427_104));
/// ```
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
