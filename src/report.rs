use crate::{
    breakdown::group_thousands, units::TARGET_SPACING, DurationBreakdown, Horizon, Result,
};
use std::io::Write;

/// The precision bound of an `f64` clock, measured and broken down.
///
/// ```
/// let report = timehorizon::Report::new()?;
///
/// assert_eq!(1_427_104, report.breakdown.years);
/// assert!(report.to_string().contains("1,427,104 years"));
/// # Ok::<(), timehorizon::Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    /// Solver output for the 0.01 s target.
    pub horizon: Horizon,

    /// `horizon.max_seconds` split into calendar-like units.
    pub breakdown: DurationBreakdown,
}

impl Report {
    /// Solves for the 0.01 s target using `f64`.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in target; the error is propagated from [`Horizon::solve`].
    pub fn new() -> Result<Self> {
        let horizon = Horizon::solve::<f64>(TARGET_SPACING)?;
        let breakdown = DurationBreakdown::try_from_seconds(horizon.max_seconds)?;

        if horizon.observed_spacing != horizon.next_representable_spacing {
            log::warn!(
                "x + x * epsilon gave {} but the next representable value is {} away",
                horizon.observed_spacing,
                horizon.next_representable_spacing,
            );
        }

        log::debug!("{breakdown:#}");

        Ok(Self { horizon, breakdown })
    }

    /// Writes the report to `writer`.
    ///
    /// # Errors
    ///
    /// Returns error if an I/O error occurred.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Maximum time with {}s precision: {:.2} seconds",
            self.horizon.target_spacing, self.horizon.max_seconds,
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Actual spacing at this value: {:.6} seconds",
            self.horizon.observed_spacing,
        )?;
        writeln!(f)?;
        writeln!(f, "Formatted result:")?;
        writeln!(f, "{}", self.breakdown)?;
        writeln!(f)?;
        writeln!(
            f,
            "Summary: An f64 storing time in seconds can track approximately"
        )?;
        writeln!(
            f,
            "{} years without losing more than 1/100th of a second precision",
            group_thousands(self.breakdown.years),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn report_lines() -> crate::Result<()> {
        let report = Report::new()?;

        let mut buf = Vec::new();
        report.write_to(&mut buf)?;
        let text = String::from_utf8(buf).expect("should be utf-8");

        assert_eq!(
            "\
Maximum time with 0.01s precision: 45035996273704.96 seconds

Actual spacing at this value: 0.007812 seconds

Formatted result:
1427104 years, 220 days, 20 hours, 55 minutes, 4.96 seconds

Summary: An f64 storing time in seconds can track approximately
1,427,104 years without losing more than 1/100th of a second precision
",
            text
        );

        Ok(())
    }

    #[test_log::test]
    fn report_breakdown_matches_horizon() -> crate::Result<()> {
        let report = Report::new()?;
        assert!((report.breakdown.to_seconds() - report.horizon.max_seconds).abs() <= 1e-6);
        Ok(())
    }
}
