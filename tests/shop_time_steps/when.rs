//! When steps for shop-time BDD scenarios.

use super::world::ShopTimeWorld;
use campaign_core::schedule::{
    domain::LocalTimeSelection,
    services::{to_local, to_utc},
};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn parse_selection(local: &str) -> Result<LocalTimeSelection, eyre::Report> {
    local
        .parse()
        .wrap_err_with(|| format!("parse scenario selection '{local}'"))
}

#[when(r#"the merchant schedules "{local}""#)]
fn merchant_schedules(world: &mut ShopTimeWorld, local: String) -> Result<(), eyre::Report> {
    let selection = parse_selection(&local)?;
    world.last_schedule = Some(to_utc(&selection, &world.zone));
    Ok(())
}

#[when(r#"the merchant reschedules "{local}" twice"#)]
fn merchant_reschedules_twice(
    world: &mut ShopTimeWorld,
    local: String,
) -> Result<(), eyre::Report> {
    let selection = parse_selection(&local)?;
    world.last_schedule = Some(to_utc(&selection, &world.zone));
    world.repeat_schedule = Some(to_utc(&selection, &world.zone));
    Ok(())
}

#[when("the merchant schedules February 30th 2024 at 10:00")]
fn merchant_schedules_impossible_date(world: &mut ShopTimeWorld) {
    let selection = LocalTimeSelection::new(2024, 2, 30, 10, 0, 0);
    world.last_schedule = Some(to_utc(&selection, &world.zone));
}

#[when("the stored instant is loaded for display")]
fn load_for_display(world: &mut ShopTimeWorld) -> Result<(), eyre::Report> {
    let stored = world.scheduled()?.to_iso_string();
    let displayed = to_local(&stored, &world.zone).wrap_err("load stored instant")?;
    world.displayed = Some(displayed);
    Ok(())
}
