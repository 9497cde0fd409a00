//! Transformed partition values
//!
//! A `HumanValue` is a partition value after a transform has already been
//! applied: an ordinal, a microsecond offset, raw bytes, or null. On the wire
//! it is adjacently tagged JSON:
//!
//! ```json
//! {"type": "day", "value": 18335}
//! {"type": "binary", "value": [1, 2, 3]}
//! {"type": "null"}
//! ```

use serde::{Deserialize, Serialize};

use crate::encoding::base64_encode;
use crate::errors::Result;
use crate::format::Formatter;

/// Rendering of a null partition value
pub const NULL_STRING: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HumanValue {
    /// Years since 1970
    Year(i32),
    /// Months since January 1970
    Month(i32),
    /// Days since 1970-01-01
    Day(i32),
    /// Hours since the epoch instant
    Hour(i32),
    /// Microseconds since midnight
    Time(i64),
    /// Microseconds since the epoch, rendered without a zone designator
    Timestamp(i64),
    /// Microseconds since the epoch, rendered in UTC with `Z`
    TimestampTz(i64),
    /// Opaque bytes, rendered as base64
    Binary(Vec<u8>),
    /// Absent value
    Null,
}

impl HumanValue {
    /// Wire tag of this value
    pub fn kind(&self) -> &'static str {
        match self {
            HumanValue::Year(_) => "year",
            HumanValue::Month(_) => "month",
            HumanValue::Day(_) => "day",
            HumanValue::Hour(_) => "hour",
            HumanValue::Time(_) => "time",
            HumanValue::Timestamp(_) => "timestamp",
            HumanValue::TimestampTz(_) => "timestamp_tz",
            HumanValue::Binary(_) => "binary",
            HumanValue::Null => "null",
        }
    }

    /// Render with default options
    pub fn to_human_string(&self) -> Result<String> {
        Formatter::DEFAULT.human_string(self)
    }
}

impl Formatter {
    /// Render any transformed value
    pub fn human_string(&self, value: &HumanValue) -> Result<String> {
        match value {
            HumanValue::Year(ordinal) => Ok(self.year(*ordinal)),
            HumanValue::Month(ordinal) => Ok(self.month(*ordinal)),
            HumanValue::Day(ordinal) => self.day(*ordinal),
            HumanValue::Hour(ordinal) => self.hour(*ordinal),
            HumanValue::Time(micros) => self.time(*micros),
            HumanValue::Timestamp(micros) => self.timestamp_without_zone(*micros),
            HumanValue::TimestampTz(micros) => self.timestamp_with_zone(*micros),
            HumanValue::Binary(bytes) => Ok(base64_encode(bytes)),
            HumanValue::Null => Ok(NULL_STRING.to_string()),
        }
    }
}
