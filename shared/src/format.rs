//! Human-readable renderings of partition ordinals
//!
//! Output formats:
//!
//! | Input                  | Format                          | Example                        |
//! |------------------------|---------------------------------|--------------------------------|
//! | year ordinal           | `YYYY`                          | `2020`                         |
//! | month ordinal          | `YYYY-MM`                       | `2020-03`                      |
//! | day ordinal            | `YYYY-MM-DD`                    | `2020-03-14`                   |
//! | hour ordinal           | `YYYY-MM-DD-HH`                 | `2020-03-14-09`                |
//! | micros from midnight   | `HH:MM:SS[.fff[fff]]`           | `09:26:53.589`                 |
//! | micros from epoch (tz) | `YYYY-MM-DDTHH:MM:SS[.f]Z`      | `2020-01-02T03:04:05.123456Z`  |
//! | micros from epoch      | `YYYY-MM-DDTHH:MM:SS[.f]`       | `2020-01-02T03:04:05.123456`   |
//!
//! Fractional seconds are only written when non-zero, using the shortest of
//! 3, 6 or 9 digits that is exact. With [`TimeStyle::Compact`] a time that
//! falls on a whole minute also drops its seconds (`00:00`,
//! `1970-01-01T00:00Z`).

use chrono::Timelike;

use crate::calendar::{self, DayFields, HourFields};
use crate::config::{FormatOptions, TimeStyle, YearPadding};
use crate::errors::Result;

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

const COMPACT_TIME_FORMAT: &str = "%H:%M";
const COMPACT_LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";
const COMPACT_UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Renders ordinals with a fixed set of [`FormatOptions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Formatter with default options, used by the free functions
    pub const DEFAULT: Formatter = Formatter {
        options: FormatOptions {
            year_padding: YearPadding::SignAware,
            time_style: TimeStyle::Full,
        },
    };

    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// `YYYY` for a year ordinal
    pub fn year(&self, ordinal: i32) -> String {
        let mut sb = String::with_capacity(4);
        self.append_year(&mut sb, calendar::year_fields(ordinal));
        sb
    }

    /// `YYYY-MM` for a month ordinal
    pub fn month(&self, ordinal: i32) -> String {
        let fields = calendar::month_fields(ordinal);
        let mut sb = String::with_capacity(7);
        self.append_year(&mut sb, fields.year);
        sb.push('-');
        append_leading_zeros(&mut sb, fields.month.into(), 2);
        sb
    }

    /// `YYYY-MM-DD` for a day ordinal
    pub fn day(&self, ordinal: i32) -> Result<String> {
        let DayFields { year, month, day } = calendar::day_fields(ordinal)?;
        let mut sb = String::with_capacity(10);
        self.append_date(&mut sb, year, month, day);
        Ok(sb)
    }

    /// `YYYY-MM-DD-HH` for an hour ordinal
    pub fn hour(&self, ordinal: i32) -> Result<String> {
        let HourFields {
            year,
            month,
            day,
            hour,
        } = calendar::hour_fields(ordinal)?;
        let mut sb = String::with_capacity(13);
        self.append_date(&mut sb, year, month, day);
        sb.push('-');
        append_leading_zeros(&mut sb, hour.into(), 2);
        Ok(sb)
    }

    /// Time of day for a count of microseconds since midnight
    pub fn time(&self, micros_from_midnight: i64) -> Result<String> {
        let time = calendar::time_from_micros(micros_from_midnight)?;
        let pattern = if self.on_whole_minute(&time) {
            COMPACT_TIME_FORMAT
        } else {
            TIME_FORMAT
        };
        Ok(time.format(pattern).to_string())
    }

    /// ISO-8601 instant with a `Z` designator
    pub fn timestamp_with_zone(&self, timestamp_micros: i64) -> Result<String> {
        let ts = calendar::timestamp_from_micros(timestamp_micros)?;
        let pattern = if self.on_whole_minute(&ts) {
            COMPACT_UTC_TIMESTAMP_FORMAT
        } else {
            UTC_TIMESTAMP_FORMAT
        };
        Ok(ts.format(pattern).to_string())
    }

    /// ISO-8601 local date-time (UTC wall clock, no designator)
    pub fn timestamp_without_zone(&self, timestamp_micros: i64) -> Result<String> {
        let ts = calendar::timestamp_from_micros(timestamp_micros)?.naive_utc();
        let pattern = if self.on_whole_minute(&ts) {
            COMPACT_LOCAL_TIMESTAMP_FORMAT
        } else {
            LOCAL_TIMESTAMP_FORMAT
        };
        Ok(ts.format(pattern).to_string())
    }

    /// Seconds may only be dropped in compact style, and only when nothing
    /// below the minute is set
    fn on_whole_minute(&self, time: &impl Timelike) -> bool {
        self.options.time_style == TimeStyle::Compact
            && time.second() == 0
            && time.nanosecond() == 0
    }

    fn append_date(&self, sb: &mut String, year: i32, month: u32, day: u32) {
        self.append_year(sb, year.into());
        sb.push('-');
        append_leading_zeros(sb, month.into(), 2);
        sb.push('-');
        append_leading_zeros(sb, day.into(), 2);
    }

    fn append_year(&self, sb: &mut String, year: i64) {
        match self.options.year_padding {
            YearPadding::SignAware => {
                if year < 0 {
                    sb.push('-');
                }
                append_leading_zeros(sb, year.unsigned_abs(), 4);
            }
            YearPadding::Legacy => pad_digits(sb, &year.to_string(), 4),
        }
    }
}

/// Left-pad the decimal form of `value` with zeros to `digits` characters.
/// Longer values are written in full, never truncated.
pub fn append_leading_zeros(sb: &mut String, value: u64, digits: usize) {
    pad_digits(sb, &value.to_string(), digits);
}

fn pad_digits(sb: &mut String, value: &str, digits: usize) {
    for _ in value.len()..digits {
        sb.push('0');
    }
    sb.push_str(value);
}

/// `YYYY` for a year ordinal
pub fn human_year(ordinal: i32) -> String {
    Formatter::DEFAULT.year(ordinal)
}

/// `YYYY-MM` for a month ordinal
pub fn human_month(ordinal: i32) -> String {
    Formatter::DEFAULT.month(ordinal)
}

/// `YYYY-MM-DD` for a day ordinal
pub fn human_day(ordinal: i32) -> Result<String> {
    Formatter::DEFAULT.day(ordinal)
}

/// `YYYY-MM-DD-HH` for an hour ordinal
pub fn human_hour(ordinal: i32) -> Result<String> {
    Formatter::DEFAULT.hour(ordinal)
}

/// Time of day for a count of microseconds since midnight
pub fn human_time(micros_from_midnight: i64) -> Result<String> {
    Formatter::DEFAULT.time(micros_from_midnight)
}

/// ISO-8601 instant with a `Z` designator
pub fn human_timestamp_with_zone(timestamp_micros: i64) -> Result<String> {
    Formatter::DEFAULT.timestamp_with_zone(timestamp_micros)
}

/// ISO-8601 local date-time (UTC wall clock, no designator)
pub fn human_timestamp_without_zone(timestamp_micros: i64) -> Result<String> {
    Formatter::DEFAULT.timestamp_without_zone(timestamp_micros)
}
