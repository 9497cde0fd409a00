//! Calendar arithmetic relative to the Unix epoch
//!
//! Every ordinal is a whole-unit offset from 1970-01-01T00:00:00 UTC. Day and
//! hour offsets go through chrono so leap years follow the proleptic
//! Gregorian calendar. Month offsets use floor division so that negative
//! ordinals land on real months (-1 is December 1969, not month 0).

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use tracing::debug;

use crate::errors::{Error, Result};

/// The reference instant all ordinals are measured from
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Calendar year of [`EPOCH`]
pub const EPOCH_YEAR: i64 = 1970;

const MONTHS_PER_YEAR: i32 = 12;
const MICROS_PER_SECOND: i64 = 1_000_000;

/// Year and month derived from a month ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFields {
    pub year: i64,
    /// 1-based month of year
    pub month: u32,
}

/// Calendar date derived from a day ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for DayFields {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Calendar date and hour derived from an hour ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

/// Year for a year ordinal. Computed in i64 so it cannot overflow.
pub fn year_fields(ordinal: i32) -> i64 {
    EPOCH_YEAR + i64::from(ordinal)
}

/// Year and month for a month ordinal, using floor division/modulo
pub fn month_fields(ordinal: i32) -> MonthFields {
    MonthFields {
        year: EPOCH_YEAR + i64::from(ordinal.div_euclid(MONTHS_PER_YEAR)),
        // rem_euclid with a positive divisor is always in 0..12
        month: 1 + ordinal.rem_euclid(MONTHS_PER_YEAR) as u32,
    }
}

/// Epoch date plus `ordinal` days
pub fn day_fields(ordinal: i32) -> Result<DayFields> {
    let date = TimeDelta::try_days(i64::from(ordinal))
        .and_then(|delta| EPOCH.date_naive().checked_add_signed(delta))
        .ok_or_else(|| {
            debug!(ordinal, "Day ordinal outside calendar range");
            Error::out_of_range("day", ordinal)
        })?;

    Ok(date.into())
}

/// Epoch instant plus `ordinal` hours
pub fn hour_fields(ordinal: i32) -> Result<HourFields> {
    let time = TimeDelta::try_hours(i64::from(ordinal))
        .and_then(|delta| EPOCH.checked_add_signed(delta))
        .ok_or_else(|| {
            debug!(ordinal, "Hour ordinal outside calendar range");
            Error::out_of_range("hour", ordinal)
        })?;

    Ok(HourFields {
        year: time.year(),
        month: time.month(),
        day: time.day(),
        hour: time.hour(),
    })
}

/// Epoch instant plus `micros` microseconds
pub fn timestamp_from_micros(micros: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros).ok_or_else(|| {
        debug!(micros, "Timestamp outside calendar range");
        Error::out_of_range("timestamp", micros)
    })
}

/// Time of day for a count of microseconds since midnight
///
/// Only `0..86_400_000_000` is a valid time of day. Negative counts fail the
/// `u32` conversion and a full day or more is rejected by chrono.
pub fn time_from_micros(micros_from_midnight: i64) -> Result<NaiveTime> {
    let secs = u32::try_from(micros_from_midnight / MICROS_PER_SECOND).ok();
    let nanos = u32::try_from(micros_from_midnight % MICROS_PER_SECOND * 1_000).ok();

    secs.zip(nanos)
        .and_then(|(secs, nanos)| NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos))
        .ok_or_else(|| {
            debug!(micros = micros_from_midnight, "Time of day out of range");
            Error::out_of_range("time", micros_from_midnight)
        })
}
