//! Probe search from shop-local wall-clock time to a UTC instant.
//!
//! Projecting an instant into a zone is a table lookup, but going the other
//! way is not a function: a local time can occur twice (fall back) or not at
//! all (spring forward). The search below probes candidate instants around
//! a first guess, projects each into the zone and keeps the first one that
//! shows the requested minute. Candidates are visited from earliest to
//! latest, so an ambiguous time resolves to its earlier occurrence and the
//! result is the same on every call.
//!
//! 1. Coarse pass: hourly steps from 14 hours before the guess to 12 hours
//!    after it, the full span of real-world UTC offsets.
//! 2. Fine pass: 15-minute steps across +/-2 hours of the closest coarse
//!    candidate. This catches zones with fractional-hour offsets.
//! 3. Otherwise the requested time is in a gap and the closest probed
//!    candidate is returned as a nearest match.
//!
//! Candidates whose wall-clock time falls outside the calendar range are
//! skipped rather than projected.

use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

use super::{LocalTimeSelection, ScheduledInstant, ShopTimeZone};

// Furthest east a zone sits from UTC (Pacific/Kiritimati, +14).
const MAX_EAST_OFFSET_HOURS: i64 = 14;
// Furthest west a zone sits from UTC (Etc/GMT+12, -12).
const MAX_WEST_OFFSET_HOURS: i64 = 12;
const FINE_WINDOW_MINUTES: i64 = 120;
const FINE_STEP_MINUTES: usize = 15;

/// Projects `instant` onto the wall clock of `zone`.
///
/// Returns `None` when the wall-clock time lies outside the representable
/// calendar range.
#[must_use]
pub fn project(instant: DateTime<Utc>, zone: ShopTimeZone) -> Option<NaiveDateTime> {
    let offset = zone.tz().offset_from_utc_datetime(&instant.naive_utc()).fix();
    instant.naive_utc().checked_add_offset(offset)
}

/// Projects `instant` onto the wall clock of `zone` as calendar fields.
///
/// Returns `None` when the wall-clock time lies outside the representable
/// calendar range.
///
/// # Examples
///
/// ```
/// use campaign_core::schedule::domain::{LocalTimeSelection, ShopTimeZone, to_local};
/// use chrono::{TimeZone, Utc};
///
/// let zone: ShopTimeZone = "Asia/Tokyo".parse().expect("known zone");
/// let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single().expect("valid instant");
/// assert_eq!(
///     to_local(instant, zone),
///     Some(LocalTimeSelection::new(2024, 1, 15, 9, 0, 0))
/// );
/// ```
#[must_use]
pub fn to_local(instant: DateTime<Utc>, zone: ShopTimeZone) -> Option<LocalTimeSelection> {
    project(instant, zone).map(LocalTimeSelection::from)
}

/// Resolves a shop-local wall-clock time to a UTC instant.
///
/// Never fails: a local time inside a DST gap resolves to the closest
/// probed candidate, reported as [`super::Resolution::Nearest`].
#[must_use]
pub fn resolve_local(local: NaiveDateTime, zone: ShopTimeZone) -> ScheduledInstant {
    let guess = local.and_utc();
    if zone.is_utc() {
        return ScheduledInstant::exact(guess);
    }

    let mut probe = Probe::new(local, zone);

    let coarse = (-MAX_EAST_OFFSET_HOURS..=MAX_WEST_OFFSET_HOURS).map(TimeDelta::hours);
    if let Some(instant) = probe.scan(guess, coarse) {
        return ScheduledInstant::exact(instant);
    }

    let centre = probe.closest().map_or(guess, |(instant, _)| instant);
    let fine = (-FINE_WINDOW_MINUTES..=FINE_WINDOW_MINUTES)
        .step_by(FINE_STEP_MINUTES)
        .map(TimeDelta::minutes);
    if let Some(instant) = probe.scan(centre, fine) {
        return ScheduledInstant::exact(instant);
    }

    match probe.closest() {
        Some((instant, shown)) => {
            ScheduledInstant::nearest(instant, LocalTimeSelection::from(shown))
        }
        // Nothing around the guess is representable in the zone.
        None => ScheduledInstant::nearest(guess, LocalTimeSelection::from(local)),
    }
}

struct Probe {
    target: NaiveDateTime,
    zone: ShopTimeZone,
    closest: Option<(TimeDelta, DateTime<Utc>, NaiveDateTime)>,
}

impl Probe {
    const fn new(target: NaiveDateTime, zone: ShopTimeZone) -> Self {
        Self {
            target,
            zone,
            closest: None,
        }
    }

    fn closest(&self) -> Option<(DateTime<Utc>, NaiveDateTime)> {
        self.closest.map(|(_, instant, shown)| (instant, shown))
    }

    /// Returns the first candidate that shows the target minute, remembering
    /// the closest miss. Ties on distance go to the earlier instant.
    fn scan(
        &mut self,
        centre: DateTime<Utc>,
        offsets: impl Iterator<Item = TimeDelta>,
    ) -> Option<DateTime<Utc>> {
        for offset in offsets {
            let Some((candidate, shown)) = centre
                .checked_add_signed(offset)
                .and_then(|candidate| {
                    project(candidate, self.zone).map(|shown| (candidate, shown))
                })
            else {
                continue;
            };
            if same_minute(shown, self.target) {
                return Some(candidate);
            }
            let entry = ((shown - self.target).abs(), candidate, shown);
            if self.closest.is_none_or(|best| entry < best) {
                self.closest = Some(entry);
            }
        }
        None
    }
}

fn same_minute(left: NaiveDateTime, right: NaiveDateTime) -> bool {
    LocalTimeSelection::from(left).same_minute(&LocalTimeSelection::from(right))
}
