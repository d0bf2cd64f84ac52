//! IANA shop time zones.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::schedule::error::ScheduleError;

/// The IANA time zone a shop schedules in.
///
/// # Examples
///
/// ```
/// use campaign_core::schedule::domain::ShopTimeZone;
///
/// let zone: ShopTimeZone = "America/New_York".parse().expect("known zone");
/// assert_eq!(zone.name(), "America/New_York");
/// assert!(!zone.is_utc());
/// assert!(ShopTimeZone::utc().is_utc());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShopTimeZone(Tz);

impl ShopTimeZone {
    /// The UTC zone, which needs no offset search.
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// Wraps an already-parsed `chrono-tz` zone.
    #[must_use]
    pub const fn from_tz(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the underlying `chrono-tz` zone.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// Returns `true` for the identity zone `"UTC"`.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.0 == Tz::UTC
    }
}

impl Default for ShopTimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for ShopTimeZone {
    type Err = ScheduleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| ScheduleError::UnknownTimeZone(value.to_owned()))
    }
}

impl TryFrom<String> for ShopTimeZone {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShopTimeZone> for String {
    fn from(zone: ShopTimeZone) -> Self {
        zone.name().to_owned()
    }
}

impl fmt::Display for ShopTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
