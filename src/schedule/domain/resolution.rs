//! The outcome of resolving shop-local time to a UTC instant.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::LocalTimeSelection;

/// How closely the resolved instant matches the requested wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The instant shows exactly the requested minute in the shop's zone.
    Exact,
    /// The requested time does not exist in the zone (a spring-forward gap);
    /// the instant is the closest probed candidate.
    Nearest {
        /// Wall-clock time the resolved instant shows in the shop's zone.
        resolved_local: LocalTimeSelection,
    },
}

/// A UTC instant resolved from a shop-local selection.
///
/// # Examples
///
/// ```
/// use campaign_core::schedule::domain::{LocalTimeSelection, ShopTimeZone, resolve_local};
///
/// let local = LocalTimeSelection::new(2024, 7, 4, 9, 30, 0)
///     .to_naive()
///     .expect("valid date");
/// let scheduled = resolve_local(local, ShopTimeZone::utc());
/// assert!(scheduled.is_exact());
/// assert_eq!(scheduled.to_iso_string(), "2024-07-04T09:30:00.000Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledInstant {
    /// The resolved instant.
    pub instant: DateTime<Utc>,
    /// Whether the instant is an exact or nearest match.
    pub resolution: Resolution,
}

impl ScheduledInstant {
    /// Creates an exact resolution.
    #[must_use]
    pub const fn exact(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            resolution: Resolution::Exact,
        }
    }

    /// Creates a nearest-match resolution.
    #[must_use]
    pub const fn nearest(instant: DateTime<Utc>, resolved_local: LocalTimeSelection) -> Self {
        Self {
            instant,
            resolution: Resolution::Nearest { resolved_local },
        }
    }

    /// Returns `true` if the requested time exists and was matched exactly.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self.resolution, Resolution::Exact)
    }

    /// Formats the instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
