//! Application services for the schedule subsystem.
//!
//! The resolver is the entry point the campaign scheduler calls right
//! before persisting a send time and right after loading one for display.

mod resolver;

pub use resolver::{ShopTimeResolver, parse_instant, to_local, to_utc};
