//! Given steps for shop-time BDD scenarios.

use super::world::ShopTimeWorld;
use rstest_bdd_macros::given;

#[given(r#"a shop in "{zone}""#)]
fn a_shop_in(world: &mut ShopTimeWorld, zone: String) {
    world.zone = zone;
}
