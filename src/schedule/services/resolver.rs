//! Shop-time resolver service.

use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use tracing::{debug, warn};

use crate::schedule::{
    domain::{self, LocalTimeSelection, Resolution, ScheduledInstant, ShopTimeZone},
    error::ScheduleError,
};

/// Converts between a shop's local wall-clock time and UTC instants.
///
/// # Examples
///
/// ```
/// use campaign_core::schedule::domain::LocalTimeSelection;
/// use campaign_core::schedule::services::ShopTimeResolver;
///
/// let resolver = ShopTimeResolver::for_zone("America/New_York").expect("known zone");
/// let selection = LocalTimeSelection::new(2024, 7, 4, 9, 30, 0);
///
/// let scheduled = resolver.to_utc(&selection).expect("valid date");
/// assert_eq!(scheduled.to_iso_string(), "2024-07-04T13:30:00.000Z");
///
/// let shown = resolver.to_local("2024-07-04T13:30:00.000Z").expect("valid instant");
/// assert_eq!(shown, selection);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopTimeResolver {
    zone: ShopTimeZone,
}

impl ShopTimeResolver {
    /// Creates a resolver for `zone`.
    #[must_use]
    pub const fn new(zone: ShopTimeZone) -> Self {
        Self { zone }
    }

    /// Creates a resolver from an IANA zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnknownTimeZone`] for unknown identifiers.
    pub fn for_zone(zone: &str) -> Result<Self, ScheduleError> {
        zone.parse().map(Self::new)
    }

    /// Returns the shop's time zone.
    #[must_use]
    pub const fn zone(&self) -> ShopTimeZone {
        self.zone
    }

    /// Resolves a local selection to a UTC instant.
    ///
    /// A selection inside a spring-forward gap is not an error: it resolves
    /// to the nearest probed instant, flagged as
    /// [`Resolution::Nearest`] and logged at warn level.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidDate`] if the fields do not form a
    /// valid calendar date and time.
    pub fn to_utc(&self, local: &LocalTimeSelection) -> Result<ScheduledInstant, ScheduleError> {
        let naive = local.to_naive()?;
        Ok(self.resolve(naive))
    }

    /// Resolves a local selection and formats the instant for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidDate`] if the fields do not form a
    /// valid calendar date and time.
    pub fn to_utc_string(&self, local: &LocalTimeSelection) -> Result<String, ScheduleError> {
        self.to_utc(local)
            .map(|scheduled| scheduled.to_iso_string())
    }

    /// Resolves an already-validated naive date/time.
    #[must_use]
    pub fn resolve(&self, local: NaiveDateTime) -> ScheduledInstant {
        let scheduled = domain::resolve_local(local, self.zone);
        match scheduled.resolution {
            Resolution::Exact => debug!(
                zone = %self.zone,
                requested = %local,
                instant = %scheduled.instant,
                "resolved shop-local time"
            ),
            Resolution::Nearest { resolved_local } => warn!(
                zone = %self.zone,
                requested = %local,
                resolved_local = %resolved_local,
                instant = %scheduled.instant,
                "shop-local time does not exist in zone; using nearest instant"
            ),
        }
        scheduled
    }

    /// Projects an ISO-8601 instant onto the shop's wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInstant`] if `instant` does not parse.
    pub fn to_local(&self, instant: &str) -> Result<LocalTimeSelection, ScheduleError> {
        self.project(parse_instant(instant)?)
    }

    /// Projects a UTC instant onto the shop's wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInstant`] if the shop-local time lies
    /// outside the representable calendar range.
    pub fn project(&self, instant: DateTime<Utc>) -> Result<LocalTimeSelection, ScheduleError> {
        domain::to_local(instant, self.zone)
            .ok_or_else(|| ScheduleError::InvalidInstant(instant.to_rfc3339()))
    }

    /// Returns the current wall-clock time in the shop.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidInstant`] if the clock reads outside
    /// the representable calendar range.
    pub fn now_local(&self, clock: &impl Clock) -> Result<LocalTimeSelection, ScheduleError> {
        self.project(clock.utc())
    }
}

/// Resolves local fields in the named zone to a UTC instant.
///
/// The date is validated before the zone is looked up or any search runs.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDate`] for impossible fields and
/// [`ScheduleError::UnknownTimeZone`] for unknown zone identifiers.
pub fn to_utc(local: &LocalTimeSelection, zone: &str) -> Result<ScheduledInstant, ScheduleError> {
    let naive = local.to_naive()?;
    let resolver = ShopTimeResolver::for_zone(zone)?;
    Ok(resolver.resolve(naive))
}

/// Projects an ISO-8601 instant onto the wall clock of the named zone.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInstant`] if `instant` does not parse and
/// [`ScheduleError::UnknownTimeZone`] for unknown zone identifiers.
pub fn to_local(instant: &str, zone: &str) -> Result<LocalTimeSelection, ScheduleError> {
    let parsed = parse_instant(instant)?;
    ShopTimeResolver::for_zone(zone)?.project(parsed)
}

/// Parses an ISO-8601 (RFC 3339) timestamp into a UTC instant.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidInstant`] if `value` does not parse.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, ScheduleError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| ScheduleError::InvalidInstant(value.to_owned()))
}
