//! Naive shop-local wall-clock selections.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schedule::error::ScheduleError;

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A date and time as a user picked it in the shop's time zone.
///
/// The fields carry no offset and are not validated on construction; the
/// resolver rejects impossible dates with [`ScheduleError::InvalidDate`].
///
/// # Examples
///
/// ```
/// use campaign_core::schedule::domain::LocalTimeSelection;
///
/// let selection: LocalTimeSelection = "2024-07-04 09:30".parse().expect("valid input");
/// assert_eq!(selection, LocalTimeSelection::new(2024, 7, 4, 9, 30, 0));
/// assert_eq!(selection.to_string(), "2024-07-04T09:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalTimeSelection {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour of day, 0 to 23.
    pub hour: u32,
    /// Minute of hour, 0 to 59.
    pub minute: u32,
    /// Second of minute, 0 to 59.
    #[serde(default)]
    pub second: u32,
}

impl LocalTimeSelection {
    /// Creates a selection from raw fields.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Converts the fields to a naive date/time.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidDate`] if the fields do not name a
    /// real calendar date and time of day.
    pub fn to_naive(&self) -> Result<NaiveDateTime, ScheduleError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day);
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, self.second);
        match (date, time) {
            (Some(valid_date), Some(valid_time)) => Ok(valid_date.and_time(valid_time)),
            _ => Err(self.invalid()),
        }
    }

    /// Returns `true` if the fields name a real calendar date and time.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.to_naive().is_ok()
    }

    /// Returns `true` if both selections agree to the minute.
    #[must_use]
    pub const fn same_minute(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
            && self.minute == other.minute
    }

    const fn invalid(&self) -> ScheduleError {
        ScheduleError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

impl From<NaiveDateTime> for LocalTimeSelection {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }
}

impl FromStr for LocalTimeSelection {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self::from)
            .ok_or_else(|| ScheduleError::UnparseableLocalTime(value.to_owned()))
    }
}

impl fmt::Display for LocalTimeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
