use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::Error;

/// An absolute point in time: milliseconds since 1970-01-01T00:00:00Z.
///
/// Instants are range-checked on construction so that every calendar month
/// around them can be represented; see [`Instant::MIN`] and [`Instant::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct Instant(i64);

impl Instant {
    /// `-262000-01-01T00:00:00.000Z`
    pub const MIN: Instant = Instant(-8_330_088_643_200_000);
    /// `262000-12-31T23:59:59.999Z`
    pub const MAX: Instant = Instant(8_205_785_827_199_999);
    pub const UNIX_EPOCH: Instant = Instant(0);

    pub fn from_millis(millis: i64) -> Result<Self, Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&millis) {
            Ok(Self(millis))
        } else {
            Err(Error::OutOfRange(millis))
        }
    }

    /// The current wall-clock time, range-checked like any other instant.
    pub fn now() -> Result<Self, Error> {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Shifts the instant by a signed number of milliseconds.
    pub fn checked_add_millis(self, millis: i64) -> Result<Self, Error> {
        let shifted = self.0.checked_add(millis).ok_or(Error::Overflow)?;
        Self::from_millis(shifted).map_err(|_| Error::Overflow)
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0)
            .expect("instant range lies inside chrono's calendar range")
    }
}

impl TryFrom<i64> for Instant {
    type Error = Error;

    fn try_from(millis: i64) -> Result<Self, Error> {
        Self::from_millis(millis)
    }
}

impl TryFrom<DateTime<Utc>> for Instant {
    type Error = Error;

    fn try_from(datetime: DateTime<Utc>) -> Result<Self, Error> {
        Self::from_millis(datetime.timestamp_millis())
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> i64 {
        instant.0
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> DateTime<Utc> {
        instant.to_datetime()
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        timestamp(text)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datetime = self.to_datetime();
        let text = datetime.to_rfc3339_opts(SecondsFormat::Millis, true);
        f.write_str(&text)
    }
}

/// Parses an RFC 3339 date-time, or a bare `YYYY-MM-DD` date taken as UTC
/// midnight, into an [`Instant`].
///
/// Offsets other than `Z` are applied, so `2024-01-01T01:00:00+01:00` is UTC
/// midnight. Date-times without an offset are rejected rather than guessed.
pub fn timestamp(text: &str) -> Result<Instant, Error> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Instant::try_from(datetime.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| Error::InvalidTimestamp(text.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::InvalidTimestamp(text.to_string()))?;
    Instant::try_from(midnight.and_utc())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const JAN_1_2024: i64 = 1_704_067_200_000;

    fn millis(text: &str) -> i64 {
        timestamp(text).unwrap().as_millis()
    }

    #[test]
    fn parses_rfc3339_and_bare_dates() {
        assert_eq!(millis("2024-01-01T00:00:00.000Z"), JAN_1_2024);
        assert_eq!(millis("2024-01-01"), JAN_1_2024);
        assert_eq!(millis("2024-01-01T01:00:00+01:00"), JAN_1_2024);
        let epoch: Instant = "1970-01-01".parse().unwrap();
        assert_eq!(epoch, Instant::UNIX_EPOCH);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        let malformed = [
            "",
            "yesterday",
            "2024-02-30",
            "2024-01-01T00:00:00",
            "2024-13-01",
        ];
        for text in malformed {
            let expected = Err(Error::InvalidTimestamp(text.to_string()));
            assert_eq!(timestamp(text), expected, "{text:?} should not parse");
        }
    }

    #[test]
    fn range_limits_are_the_documented_dates() {
        let min = NaiveDate::from_ymd_opt(-262_000, 1, 1)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 0)
            .unwrap()
            .and_utc();
        let max = NaiveDate::from_ymd_opt(262_000, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
            .and_utc();
        assert_eq!(Instant::MIN.to_datetime(), min);
        assert_eq!(Instant::MAX.to_datetime(), max);

        let last = Instant::MAX.as_millis();
        assert_eq!(Instant::from_millis(last), Ok(Instant::MAX));
        let past = last + 1;
        assert_eq!(Instant::from_millis(past), Err(Error::OutOfRange(past)));
        let floor = i64::MIN;
        assert_eq!(Instant::from_millis(floor), Err(Error::OutOfRange(floor)));
    }

    #[test]
    fn checked_add_millis_stays_in_range() {
        let instant = timestamp("2024-02-10T12:00:00Z").unwrap();
        let earlier = instant.checked_add_millis(-1).unwrap();
        assert_eq!(earlier.to_string(), "2024-02-10T11:59:59.999Z");
        assert_eq!(Instant::MAX.checked_add_millis(1), Err(Error::Overflow));
        let far = i64::MIN;
        assert_eq!(Instant::MIN.checked_add_millis(far), Err(Error::Overflow));
    }

    #[test]
    fn now_is_representable() {
        let now = Instant::now().unwrap();
        assert_eq!(Instant::from_millis(now.as_millis()), Ok(now));
    }
}
