//! Step definitions for shop-time scheduling scenarios.

mod given;
mod then;
mod when;
pub mod world;
