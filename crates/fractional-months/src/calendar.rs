use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::{Error, Instant};

/// UTC calendar fields of an instant, as month arithmetic needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CalendarDate {
    pub(crate) year: i32,
    /// 0-11
    pub(crate) month0: u32,
    pub(crate) day: u32,
    pub(crate) time: NaiveTime,
}

impl CalendarDate {
    pub(crate) fn of(instant: Instant) -> Self {
        let datetime = instant.to_datetime();
        Self {
            year: datetime.year(),
            month0: datetime.month0(),
            day: datetime.day(),
            time: datetime.time(),
        }
    }

    /// Calendar months from this date's month to `other`'s, ignoring days.
    pub(crate) fn months_until(&self, other: &CalendarDate) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12
            + (i64::from(other.month0) - i64::from(self.month0))
    }

    /// The boundary `months` calendar months away, keeping this date's day and
    /// time-of-day.
    ///
    /// The day is laid out as "first of the target month plus `day - 1` days",
    /// so a day the month lacks rolls into the next month. Such a day is
    /// imaginary and takes no time: the boundary collapses onto the rollover.
    pub(crate) fn boundary(&self, months: i64) -> Option<MonthBoundary> {
        let total = i64::from(self.month0).checked_add(months)?;
        let year = i32::try_from(i64::from(self.year) + total.div_euclid(12)).ok()?;
        let month = total.rem_euclid(12) as u32 + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date = first.checked_add_days(Days::new(u64::from(self.day - 1)))?;
        let (datetime, imaginary) = if date.month() == month {
            (date.and_time(self.time), false)
        } else {
            (date.with_day(1)?.and_hms_opt(0, 0, 0)?, true)
        };
        Some(MonthBoundary {
            millis: datetime.and_utc().timestamp_millis(),
            imaginary,
        })
    }
}

/// The point a whole number of calendar months from an anchor instant, at the
/// anchor's day-of-month and time-of-day.
///
/// When the target month is too short for the anchor's day, the boundary falls
/// on an imaginary zero-length day. It then lies after every instant of the
/// short month but before the first instant of the next one, so no instant is
/// exactly on it; [`MonthBoundary::instant`] returns that next month's first
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBoundary {
    millis: i64,
    imaginary: bool,
}

impl MonthBoundary {
    /// The boundary itself, or for an imaginary boundary the first instant
    /// after it.
    pub fn instant(self) -> Instant {
        Instant::from_millis(self.millis)
            .expect("public boundaries are range-checked on construction")
    }

    pub fn is_imaginary(self) -> bool {
        self.imaginary
    }

    /// Position on the half-millisecond grid that orders boundaries against
    /// instants. An imaginary boundary is one tick before its rollover.
    pub(crate) fn ticks(self) -> i64 {
        self.millis * 2 - i64::from(self.imaginary)
    }
}

pub(crate) fn ticks(instant: Instant) -> i64 {
    instant.as_millis() * 2
}

/// Locates the boundary `months` calendar months from `from`.
///
/// Fails with [`Error::Overflow`] when the boundary leaves the supported
/// instant range.
pub fn month_boundary(from: Instant, months: i64) -> Result<MonthBoundary, Error> {
    let boundary = CalendarDate::of(from)
        .boundary(months)
        .ok_or(Error::Overflow)?;
    Instant::from_millis(boundary.millis).map_err(|_| Error::Overflow)?;
    Ok(boundary)
}
