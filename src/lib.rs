//! How long can an `f64` clock count seconds before it stops resolving centiseconds?
//!
//! Adjacent doubles near `x` are `x * 2^-52` apart, so a clock stored as seconds in an `f64`
//! keeps a spacing of at most 0.01 s up to `0.01 * 2^52 = 45_035_996_273_704.96` seconds,
//! which is a little over 1.4 million years (with 365.25-day years).
//!
//! ```
//! use timehorizon::{DurationBreakdown, Horizon};
//!
//! let horizon = Horizon::solve::<f64>(0.01)?;
//! assert_eq!(45_035_996_273_704.96, horizon.max_seconds);
//!
//! let breakdown = DurationBreakdown::from_seconds(horizon.max_seconds);
//! assert_eq!("1427104y 220d 20h 55m 4.96s", format!("{breakdown:#}"));
//!
//! // single precision runs out after about a day
//! let horizon = Horizon::solve::<f32>(0.01)?;
//! assert_eq!(0, DurationBreakdown::from_seconds(horizon.max_seconds).days);
//!
//! # Ok::<(), timehorizon::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![warn(clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod breakdown;
mod error;
mod horizon;
mod report;

pub mod units;

pub use breakdown::{group_thousands, DurationBreakdown};
pub use error::{Error, Result};
pub use horizon::{max_magnitude, spacing_ladder, FloatFormat, Horizon};
pub use report::Report;
