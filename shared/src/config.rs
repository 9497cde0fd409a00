//! Formatter configuration
//!
//! Two knobs: how negative years are padded, and whether whole-minute times
//! keep their `:00` seconds. Options can be built in code, deserialized from
//! JSON, or read from the environment.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Environment variable selecting the year padding convention
pub const YEAR_PADDING_ENV: &str = "HUMANIZE_YEAR_PADDING";

/// Environment variable selecting the time-of-day convention
pub const TIME_STYLE_ENV: &str = "HUMANIZE_TIME_STYLE";

/// How a year is zero-padded to four digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearPadding {
    /// Sign first, then the zero-padded magnitude: year -5 is `-0005`
    #[default]
    SignAware,
    /// Pad the signed decimal string as-is: year -5 is `00-5`.
    /// Only useful for matching output written by older tooling.
    Legacy,
}

impl YearPadding {
    fn parse(value: &str) -> Result<Self> {
        match normalize(value).as_str() {
            "sign_aware" => Ok(YearPadding::SignAware),
            "legacy" => Ok(YearPadding::Legacy),
            other => Err(Error::InvalidConfig(format!(
                "unknown year padding: {}",
                other
            ))),
        }
    }
}

/// How the seconds field of a time of day is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStyle {
    /// Always `HH:MM:SS`, with a fraction only when non-zero
    #[default]
    Full,
    /// `HH:MM` when seconds and fraction are both zero, as older tooling
    /// wrote it (`00:00`, `1970-01-01T00:00Z`)
    Compact,
}

impl TimeStyle {
    fn parse(value: &str) -> Result<Self> {
        match normalize(value).as_str() {
            "full" => Ok(TimeStyle::Full),
            "compact" => Ok(TimeStyle::Compact),
            other => Err(Error::InvalidConfig(format!(
                "unknown time style: {}",
                other
            ))),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Options applied by a [`Formatter`](crate::Formatter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub year_padding: YearPadding,
    #[serde(default)]
    pub time_style: TimeStyle,
}

impl FormatOptions {
    /// Read options from the environment, falling back to defaults when unset
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();

        if let Some(value) = lookup(YEAR_PADDING_ENV) {
            options.year_padding = YearPadding::parse(&value)?;
        }
        if let Some(value) = lookup(TIME_STYLE_ENV) {
            options.time_style = TimeStyle::parse(&value)?;
        }

        Ok(options)
    }
}
