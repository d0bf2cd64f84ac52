//! Unit tests for the schedule module.


use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn zone(name: &str) -> crate::schedule::domain::ShopTimeZone {
    name.parse().expect("test zone should be known")
}

fn instant(value: &str) -> DateTime<Utc> {
    crate::schedule::services::parse_instant(value).expect("test instant should parse")
}
