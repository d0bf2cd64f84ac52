//! Domain types for the schedule subsystem.
//!
//! Shop-local selections, time zones, and the search that maps one onto a
//! UTC instant. All functions are pure and bounded.

mod local_time;
mod resolution;
mod search;
mod zone;

pub use local_time::LocalTimeSelection;
pub use resolution::{Resolution, ScheduledInstant};
pub use search::{project, resolve_local, to_local};
pub use zone::ShopTimeZone;
