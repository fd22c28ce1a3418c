use tracing::trace;

use crate::calendar::{CalendarDate, MonthBoundary, ticks};
use crate::unit::Measure;
use crate::{Instant, Unit};

/// Signed difference from `from` to `to`, measured in `unit`.
///
/// Fixed-length units divide the elapsed milliseconds exactly. Calendar units
/// are fractional months (see [`month_difference`]) scaled to the unit.
pub fn unit_difference(from: Instant, to: Instant, unit: Unit) -> f64 {
    match unit.measure() {
        Measure::Fixed(millis) => (to.as_millis() - from.as_millis()) as f64 / millis as f64,
        Measure::Calendar(months) => month_difference(from, to) / f64::from(months),
    }
}

/// Signed fractional number of months from `from` to `to`.
///
/// Month boundaries sit at `from`'s day-of-month and time-of-day in each
/// month. The integer part counts boundaries crossed; the fraction is the
/// position of `to` between the two boundaries around it, by elapsed time.
/// Landing exactly on a boundary gives an exact integer.
pub fn month_difference(from: Instant, to: Instant) -> f64 {
    if from == to {
        return 0.0;
    }
    let anchor = CalendarDate::of(from);
    let delta = anchor.months_until(&CalendarDate::of(to));
    let boundary = |months: i64| {
        anchor
            .boundary(months)
            .expect("boundaries next to in-range instants are representable")
    };

    // Each boundary stays within its own calendar month (imaginary ones end
    // it), so `to` is bracketed by the boundary `delta` months on and one of
    // its neighbours.
    let target = ticks(to);
    let estimate = boundary(delta);
    let (whole, fraction) = if to > from {
        let (whole, lower, upper) = if estimate.ticks() <= target {
            (delta, estimate, boundary(delta + 1))
        } else {
            (delta - 1, boundary(delta - 1), estimate)
        };
        (whole, position(target, lower, upper))
    } else {
        let (whole, near, far) = if target <= estimate.ticks() {
            (delta, estimate, boundary(delta - 1))
        } else {
            (delta + 1, boundary(delta + 1), estimate)
        };
        (whole, -position(target, near, far))
    };
    trace!(
        from = from.as_millis(),
        to = to.as_millis(),
        whole,
        fraction,
        "month difference"
    );
    whole as f64 + fraction
}

/// How far `target` has moved from `start` towards `end`, in `[0, 1)`.
fn position(target: i64, start: MonthBoundary, end: MonthBoundary) -> f64 {
    let span = end.ticks() - start.ticks();
    if span == 0 {
        return 0.0;
    }
    (target - start.ticks()) as f64 / span as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::timestamp;

    fn at(text: &str) -> Instant {
        timestamp(text).unwrap()
    }

    #[test]
    fn half_month_into_february() {
        let from = at("2023-02-01T00:00:00Z");
        let to = at("2023-02-15T00:00:00Z");
        assert_eq!(month_difference(from, to), 0.5);
        assert_eq!(month_difference(to, from), -14.0 / 31.0);
    }

    #[test]
    fn bracket_estimate_steps_back_over_an_imaginary_boundary() {
        // `to` is in March but before the boundary on the imaginary Feb 31.
        let from = at("2023-01-31T12:00:00Z");
        let to = at("2023-03-01T00:00:00Z");
        let months = month_difference(from, to);
        assert!(months > 1.0 && months < 1.000_000_001, "{months}");

        let to = at("2023-02-28T23:59:59.999Z");
        let months = month_difference(from, to);
        assert!(months > 0.999_999_999 && months < 1.0, "{months}");
    }

    #[test]
    fn backward_bracket_steps_forward() {
        // Counting back, `to` is later in March than the Mar 10 boundary, so
        // fewer whole months have passed than the month delta says.
        let from = at("2024-05-10T00:00:00Z");
        let to = at("2024-03-20T00:00:00Z");
        let expected = -1.0 - 21.0 / 31.0;
        assert!((month_difference(from, to) - expected).abs() < 1e-12);
    }

    #[test]
    fn quarters_and_years_scale_months() {
        let from = at("2024-01-01");
        let to = at("2025-07-01");
        assert_eq!(unit_difference(from, to, Unit::Months), 18.0);
        assert_eq!(unit_difference(from, to, Unit::Quarters), 6.0);
        assert_eq!(unit_difference(from, to, Unit::Years), 1.5);
    }
}
