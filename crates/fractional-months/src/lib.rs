#![deny(clippy::unwrap_used)]

//! Differences between UTC instants as fractional months or fixed time units.
//!
//! Month differences are signed real numbers:
//!
//! - a difference of a whole number of months is an exact integer;
//! - anything else is fractional, with the fraction giving the position of the
//!   to-instant between the month boundaries on either side of it;
//! - boundaries are at the from-instant's day-of-month and time-of-day in
//!   each month;
//! - the value is negative when the to-instant is earlier.
//!
//! Months shorter than 31 days are treated as if the missing days exist but
//! last no time ("imaginary days"). Counting one month on from January 30th
//! lands on February 30th, which ends February: every instant in February is
//! less than a month on and every instant in March is more, and no instant is
//! exactly one month on.
//!
//! ```
//! use fractional_months::{month_difference, timestamp};
//!
//! let jan30 = timestamp("2024-01-30T12:34:56Z")?;
//! let end_of_feb = timestamp("2024-02-29T23:59:59.999Z")?;
//! let start_of_march = timestamp("2024-03-01T00:00:00Z")?;
//!
//! let months = month_difference(jan30, end_of_feb);
//! assert!(months > 0.999_999_999 && months < 1.0);
//! let months = month_difference(jan30, start_of_march);
//! assert!(months > 1.0 && months < 1.000_000_001);
//!
//! let feb10 = timestamp("2024-02-10T12:00:00Z")?;
//! let mar10 = timestamp("2024-03-10T12:00:00Z")?;
//! assert_eq!(month_difference(feb10, mar10), 1.0);
//! assert_eq!(month_difference(mar10, feb10), -1.0);
//! # Ok::<(), fractional_months::Error>(())
//! ```
//!
//! Rounding is left to the caller; flooring a month difference, for example,
//! buckets instants into month-long periods that start at the from-instant.

mod calendar;
mod difference;
mod error;
mod instant;
mod unit;

pub use calendar::{MonthBoundary, month_boundary};
pub use difference::{month_difference, unit_difference};
pub use error::Error;
pub use instant::{Instant, timestamp};
pub use unit::Unit;
