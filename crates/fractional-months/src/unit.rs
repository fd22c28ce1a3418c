use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Granularity of a difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Unit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

/// How a unit is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Measure {
    /// Constant length in milliseconds.
    Fixed(i64),
    /// A whole number of calendar months.
    Calendar(u32),
}

impl Unit {
    /// Every unit, from shortest to longest.
    pub const ALL: [Unit; 9] = [
        Unit::Milliseconds,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Quarters,
        Unit::Years,
    ];

    /// Lowercase plural name, as parsed by `FromStr`.
    ///
    /// ```
    /// use fractional_months::Unit;
    ///
    /// assert_eq!(Unit::Quarters.name(), "quarters");
    /// assert_eq!("quarters".parse(), Ok(Unit::Quarters));
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Milliseconds => "milliseconds",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Quarters => "quarters",
            Unit::Years => "years",
        }
    }

    pub(crate) const fn measure(self) -> Measure {
        match self {
            Unit::Milliseconds => Measure::Fixed(1),
            Unit::Seconds => Measure::Fixed(1_000),
            Unit::Minutes => Measure::Fixed(60_000),
            Unit::Hours => Measure::Fixed(3_600_000),
            Unit::Days => Measure::Fixed(86_400_000),
            Unit::Weeks => Measure::Fixed(604_800_000),
            Unit::Months => Measure::Calendar(1),
            Unit::Quarters => Measure::Calendar(3),
            Unit::Years => Measure::Calendar(12),
        }
    }

    /// Length in milliseconds, or `None` for units measured in calendar months.
    pub const fn fixed_millis(self) -> Option<i64> {
        match self.measure() {
            Measure::Fixed(millis) => Some(millis),
            Measure::Calendar(_) => None,
        }
    }

    /// Whether the unit counts calendar months rather than milliseconds.
    pub const fn is_calendar(self) -> bool {
        matches!(self.measure(), Measure::Calendar(_))
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
