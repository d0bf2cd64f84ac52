//! Then steps for shop-time BDD scenarios.

use super::world::ShopTimeWorld;
use campaign_core::schedule::{domain::LocalTimeSelection, error::ScheduleError};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the stored instant is "{instant}""#)]
fn stored_instant_is(world: &ShopTimeWorld, instant: String) -> Result<(), eyre::Report> {
    let stored = world.scheduled()?.to_iso_string();
    if stored != instant {
        return Err(eyre::eyre!("expected {instant}, stored {stored}"));
    }
    Ok(())
}

#[then("the resolution is exact")]
fn resolution_is_exact(world: &ShopTimeWorld) -> Result<(), eyre::Report> {
    let scheduled = world.scheduled()?;
    if !scheduled.is_exact() {
        return Err(eyre::eyre!("expected exact match, got {:?}", scheduled.resolution));
    }
    Ok(())
}

#[then("the resolution is a nearest match")]
fn resolution_is_nearest(world: &ShopTimeWorld) -> Result<(), eyre::Report> {
    let scheduled = world.scheduled()?;
    if scheduled.is_exact() {
        return Err(eyre::eyre!("expected a nearest match for a DST gap"));
    }
    Ok(())
}

#[then(r#"the displayed time is "{local}""#)]
fn displayed_time_is(world: &ShopTimeWorld, local: String) -> Result<(), eyre::Report> {
    let expected: LocalTimeSelection = local
        .parse()
        .wrap_err_with(|| format!("parse expected selection '{local}'"))?;
    let displayed = world
        .displayed
        .ok_or_else(|| eyre::eyre!("nothing displayed in scenario world"))?;
    if displayed != expected {
        return Err(eyre::eyre!("expected {expected}, displayed {displayed}"));
    }
    Ok(())
}

#[then("both stored instants are identical")]
fn both_instants_identical(world: &ShopTimeWorld) -> Result<(), eyre::Report> {
    let first = world.scheduled()?.to_iso_string();
    let second = match world.repeat_schedule.as_ref() {
        Some(Ok(scheduled)) => scheduled.to_iso_string(),
        Some(Err(error)) => return Err(eyre::eyre!("second attempt failed: {error}")),
        None => return Err(eyre::eyre!("no second attempt in scenario world")),
    };
    if first != second {
        return Err(eyre::eyre!("expected identical instants, got {first} and {second}"));
    }
    Ok(())
}

#[then("scheduling fails with an invalid date")]
fn fails_with_invalid_date(world: &ShopTimeWorld) -> Result<(), eyre::Report> {
    match world.last_schedule.as_ref() {
        Some(Err(ScheduleError::InvalidDate { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected invalid date error, got {other:?}")),
    }
}

#[then("scheduling fails with an unknown time zone")]
fn fails_with_unknown_zone(world: &ShopTimeWorld) -> Result<(), eyre::Report> {
    match world.last_schedule.as_ref() {
        Some(Err(ScheduleError::UnknownTimeZone(_))) => Ok(()),
        other => Err(eyre::eyre!("expected unknown time zone error, got {other:?}")),
    }
}
