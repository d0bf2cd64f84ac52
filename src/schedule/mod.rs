//! Shop-local time resolution for campaign scheduling.
//!
//! A merchant picks a send time on their shop's wall clock; the campaign is
//! stored as a UTC instant. This module converts between the two for any
//! IANA zone, including local times that are ambiguous or skipped by a DST
//! transition.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::LocalTimeSelection`], [`domain::ShopTimeZone`],
//!   and the probe search in [`domain::resolve_local`]
//! - **Services**: [`services::ShopTimeResolver`], with ISO-8601 string
//!   boundaries and logging
//! - **Errors**: [`error::ScheduleError`]
//!
//! # Example
//!
//! ```
//! use campaign_core::schedule::domain::LocalTimeSelection;
//! use campaign_core::schedule::services::{to_local, to_utc};
//!
//! // 02:30 does not exist in New York on 2024-03-10.
//! let gap = LocalTimeSelection::new(2024, 3, 10, 2, 30, 0);
//! let scheduled = to_utc(&gap, "America/New_York").expect("valid date");
//! assert!(!scheduled.is_exact());
//! assert_eq!(scheduled.to_iso_string(), "2024-03-10T07:00:00.000Z");
//!
//! let shown = to_local(&scheduled.to_iso_string(), "America/New_York").expect("valid instant");
//! assert_eq!(shown, LocalTimeSelection::new(2024, 3, 10, 3, 0, 0));
//! ```

pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
mod tests;
