//! Humanize Core Library
//!
//! Renders transformed partition values as human-readable strings:
//! - Calendar arithmetic against the Unix epoch
//! - Zero-padded ISO-8601 style formatting
//! - Base64 text for binary values
//! - Formatter configuration
//! - Error types

pub mod calendar;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod format;
pub mod value;

pub use calendar::{EPOCH, EPOCH_YEAR};
pub use config::{FormatOptions, TimeStyle, YearPadding};
pub use encoding::base64_encode;
pub use errors::{Error, Result};
pub use format::{
    human_day, human_hour, human_month, human_time, human_timestamp_with_zone,
    human_timestamp_without_zone, human_year, Formatter,
};
pub use value::HumanValue;
