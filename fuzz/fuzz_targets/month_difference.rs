//! Fuzz target: month and unit differences.
//!
//! Invariants checked:
//! - No panic for any pair of supported instants and any unit.
//! - An instant is zero months from itself.
//! - The sign of a month difference follows the direction of travel.
//! - Month differences never decrease as `to` moves forward.
//! - Fixed-length units are antisymmetric.

#![no_main]

use arbitrary::Arbitrary;
use fractional_months::{Instant, Unit, month_difference, unit_difference};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    from: i64,
    to: i64,
    step: u32,
    unit: u8,
}

/// Folds an arbitrary count into the supported instant range.
fn clamp(millis: i64) -> Instant {
    let min = Instant::MIN.as_millis();
    let span = Instant::MAX.as_millis() - min + 1;
    Instant::from_millis(min + millis.rem_euclid(span)).expect("folded into range")
}

fuzz_target!(|input: Input| {
    let from = clamp(input.from);
    let to = clamp(input.to);
    let unit = Unit::ALL[usize::from(input.unit) % Unit::ALL.len()];

    let months = month_difference(from, to);
    assert!(months.is_finite());
    assert_eq!(months.partial_cmp(&0.0), Some(to.cmp(&from)));
    assert_eq!(month_difference(from, from), 0.0);

    let difference = unit_difference(from, to, unit);
    assert!(difference.is_finite());
    if !unit.is_calendar() {
        assert_eq!(difference, -unit_difference(to, from, unit));
    }

    // Phase 2: a later `to` never gives a smaller month difference.
    if let Ok(later) = to.checked_add_millis(i64::from(input.step)) {
        let later_months = month_difference(from, later);
        assert!(months <= later_months, "decreased at {later}");
    }
});
