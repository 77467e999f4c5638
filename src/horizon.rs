use crate::{Error, Result};

/// Binary floating point format a clock can be stored in.
///
/// Implemented for [`f64`] and [`f32`]. Magnitudes are always passed around as
/// `f64`; implementations narrow them to their own width before measuring.
pub trait FloatFormat {
    /// Explicit fraction bits of the significand (one less than its precision).
    const FRACTION_BITS: u32;

    /// Largest finite value of the format.
    const MAX: f64;

    /// Short type name used in log output.
    const NAME: &'static str;

    /// Gap obtained by adding `x * machine_epsilon` to `x`, computed in this format.
    fn observed_spacing(x: f64) -> f64;

    /// Gap between `x` and the very next representable value above it.
    ///
    /// `x` is taken by magnitude; non-finite inputs yield NaN.
    fn next_representable_spacing(x: f64) -> f64;
}

impl FloatFormat for f64 {
    const FRACTION_BITS: u32 = Self::MANTISSA_DIGITS - 1;
    const MAX: f64 = f64::MAX;
    const NAME: &'static str = "f64";

    fn observed_spacing(x: f64) -> f64 {
        let next = x + x * Self::EPSILON;
        next - x
    }

    fn next_representable_spacing(x: f64) -> f64 {
        let x = x.abs();
        Self::from_bits(x.to_bits() + 1) - x
    }
}

impl FloatFormat for f32 {
    const FRACTION_BITS: u32 = Self::MANTISSA_DIGITS - 1;
    const MAX: f64 = f32::MAX as f64;
    const NAME: &'static str = "f32";

    #[allow(clippy::cast_possible_truncation)]
    fn observed_spacing(x: f64) -> f64 {
        let x = x as Self;
        let next = x + x * Self::EPSILON;
        f64::from(next - x)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_representable_spacing(x: f64) -> f64 {
        let x = (x as Self).abs();
        f64::from(Self::from_bits(x.to_bits() + 1) - x)
    }
}

/// Largest magnitude whose spacing stays at or below `epsilon`.
///
/// For normalized values the gap near `x` is `x * 2^-fraction_bits`, so the
/// bound is `epsilon * 2^fraction_bits`.
///
/// ```
/// assert_eq!(45_035_996_273_704.96, timehorizon::max_magnitude(0.01, 52));
/// ```
#[must_use]
pub fn max_magnitude(epsilon: f64, fraction_bits: u32) -> f64 {
    let exponent = i32::try_from(fraction_bits).unwrap_or(i32::MAX);
    epsilon * 2.0_f64.powi(exponent)
}

/// Spacing at every power of two in `[1, upper)`, smallest first.
///
/// Each entry is `(magnitude, observed spacing)`.
#[must_use]
pub fn spacing_ladder<F: FloatFormat>(upper: f64) -> Vec<(f64, f64)> {
    let mut ladder = Vec::new();
    let mut magnitude = 1.0_f64;

    while magnitude < upper && magnitude <= F::MAX {
        let spacing = F::observed_spacing(magnitude);
        log::trace!("{}: spacing at {magnitude:e} is {spacing:e}", F::NAME);
        ladder.push((magnitude, spacing));
        magnitude *= 2.0;
    }

    ladder
}

/// Outcome of solving for the precision bound of one float format.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Horizon {
    /// Requested maximum spacing, in seconds.
    pub target_spacing: f64,

    /// Fraction bits of the format that was solved for.
    pub fraction_bits: u32,

    /// Largest time, in seconds, that keeps the target spacing.
    pub max_seconds: f64,

    /// Spacing measured at `max_seconds` via `x + x * epsilon`.
    pub observed_spacing: f64,

    /// Gap to the next representable value above `max_seconds`.
    pub next_representable_spacing: f64,
}

impl Horizon {
    /// Solves the closed form for float format `F` and measures the result.
    ///
    /// ```
    /// use timehorizon::Horizon;
    ///
    /// let horizon = Horizon::solve::<f64>(0.01)?;
    /// assert!(horizon.observed_spacing <= 0.01);
    /// # Ok::<(), timehorizon::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpacing`] if `target_spacing` is not positive and
    /// finite, or if the resulting bound does not fit into `F`.
    pub fn solve<F: FloatFormat>(target_spacing: f64) -> Result<Self> {
        if !target_spacing.is_finite() || target_spacing <= 0.0 {
            return Err(Error::InvalidSpacing(target_spacing));
        }

        let max_seconds = max_magnitude(target_spacing, F::FRACTION_BITS);
        if !max_seconds.is_finite() || max_seconds > F::MAX {
            return Err(Error::InvalidSpacing(target_spacing));
        }

        let observed_spacing = F::observed_spacing(max_seconds);
        let next_representable_spacing = F::next_representable_spacing(max_seconds);

        log::debug!(
            "{}: {max_seconds} s keeps spacing <= {target_spacing} (observed {observed_spacing}, ulp {next_representable_spacing})",
            F::NAME,
        );

        Ok(Self {
            target_spacing,
            fraction_bits: F::FRACTION_BITS,
            max_seconds,
            observed_spacing,
            next_representable_spacing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TARGET_SPACING;

    #[test_log::test]
    fn closed_form_f64() {
        assert_eq!(52, <f64 as FloatFormat>::FRACTION_BITS);
        assert_eq!(
            45_035_996_273_704.96,
            max_magnitude(TARGET_SPACING, <f64 as FloatFormat>::FRACTION_BITS)
        );
    }

    #[test_log::test]
    fn closed_form_wide_fractions() {
        assert_eq!(0.01 * 18_446_744_073_709_551_616.0, max_magnitude(0.01, 64));
        assert_eq!(f64::INFINITY, max_magnitude(0.01, 2_000));
        assert_eq!(f64::INFINITY, max_magnitude(0.01, u32::MAX));
    }

    #[test_log::test]
    fn solve_f64() -> crate::Result<()> {
        let horizon = Horizon::solve::<f64>(TARGET_SPACING)?;

        assert_eq!(45_035_996_273_704.96, horizon.max_seconds);
        assert!(horizon.observed_spacing <= TARGET_SPACING);
        assert_eq!(0.007_812_5, horizon.observed_spacing);
        assert_eq!(horizon.observed_spacing, horizon.next_representable_spacing);

        Ok(())
    }

    #[test_log::test]
    fn solve_f32() -> crate::Result<()> {
        let horizon = Horizon::solve::<f32>(TARGET_SPACING)?;

        assert_eq!(23, horizon.fraction_bits);
        assert!((horizon.max_seconds - 83_886.08).abs() < 1e-9);
        assert!(horizon.observed_spacing <= TARGET_SPACING);
        assert_eq!(0.007_812_5, horizon.next_representable_spacing);

        Ok(())
    }

    #[test_log::test]
    fn spacing_grows_with_magnitude() -> crate::Result<()> {
        let horizon = Horizon::solve::<f64>(TARGET_SPACING)?;
        let ladder = spacing_ladder::<f64>(horizon.max_seconds);

        assert_eq!(46, ladder.len());

        for pair in ladder.windows(2) {
            let [(_, lower), (_, upper)] = pair else {
                unreachable!();
            };
            assert!(lower < upper);
        }

        for &(magnitude, spacing) in &ladder {
            assert!(spacing <= horizon.observed_spacing);

            // everything below the binade of the bound is strictly finer
            if magnitude * 2.0 <= horizon.max_seconds {
                assert!(spacing < horizon.observed_spacing);
            }
        }

        Ok(())
    }

    #[test_log::test]
    fn just_past_the_bound_is_coarser() {
        let beyond = 2.0_f64.powi(46);
        assert_eq!(0.015_625, <f64 as FloatFormat>::observed_spacing(beyond));
    }

    #[test_log::test]
    fn rejects_bad_spacing() {
        assert!(matches!(
            Horizon::solve::<f64>(0.0),
            Err(Error::InvalidSpacing(_))
        ));
        assert!(matches!(
            Horizon::solve::<f64>(-0.01),
            Err(Error::InvalidSpacing(_))
        ));
        assert!(matches!(
            Horizon::solve::<f64>(f64::NAN),
            Err(Error::InvalidSpacing(_))
        ));
        assert!(matches!(
            Horizon::solve::<f32>(1e300),
            Err(Error::InvalidSpacing(_))
        ));
    }
}
