//! Shared world state for shop-time BDD scenarios.

use campaign_core::schedule::{
    domain::{LocalTimeSelection, ScheduledInstant},
    error::ScheduleError,
};
use rstest::fixture;

/// Scenario world for shop-time behaviour tests.
#[derive(Default)]
pub struct ShopTimeWorld {
    /// IANA zone identifier of the shop, as configured.
    pub zone: String,
    /// Result of the most recent scheduling attempt.
    pub last_schedule: Option<Result<ScheduledInstant, ScheduleError>>,
    /// Result of a second scheduling attempt with the same input.
    pub repeat_schedule: Option<Result<ScheduledInstant, ScheduleError>>,
    /// Wall-clock time shown after loading the stored instant.
    pub displayed: Option<LocalTimeSelection>,
}

impl ShopTimeWorld {
    /// Returns the successfully scheduled instant.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing was scheduled or scheduling failed.
    pub fn scheduled(&self) -> Result<&ScheduledInstant, eyre::Report> {
        match self.last_schedule.as_ref() {
            Some(Ok(scheduled)) => Ok(scheduled),
            Some(Err(error)) => Err(eyre::eyre!("scheduling failed: {error}")),
            None => Err(eyre::eyre!("nothing scheduled in scenario world")),
        }
    }
}

/// Fixture providing a fresh world per scenario.
#[fixture]
pub fn world() -> ShopTimeWorld {
    ShopTimeWorld::default()
}
