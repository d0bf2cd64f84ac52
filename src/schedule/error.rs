//! Error types for shop-time resolution.
//!
//! Uses `thiserror` for typed variants that callers can match on. A
//! nearest-match resolution inside a DST gap is not an error; see
//! [`super::domain::Resolution`].

use thiserror::Error;

/// Errors that can occur while converting between shop time and UTC.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The local fields do not form a valid calendar date and time.
    #[error("invalid local date/time {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month, 1-based.
        month: u32,
        /// Day of month, 1-based.
        day: u32,
        /// Hour of day.
        hour: u32,
        /// Minute of hour.
        minute: u32,
        /// Second of minute.
        second: u32,
    },

    /// A local date/time string could not be parsed.
    #[error("unparseable local date/time '{0}'")]
    UnparseableLocalTime(String),

    /// The timestamp string does not parse as an ISO-8601 instant.
    #[error("invalid instant '{0}': expected an ISO-8601 timestamp")]
    InvalidInstant(String),

    /// The zone identifier is not a known IANA time zone.
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
}

impl ScheduleError {
    /// Returns `true` if the error concerns malformed local input.
    #[must_use]
    pub const fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. } | Self::UnparseableLocalTime(_)
        )
    }
}
