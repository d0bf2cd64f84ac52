//! Campaign core: SMS segmentation and shop-time scheduling.
//!
//! This crate holds the domain logic behind the SMS campaign builder: how
//! many billable parts a draft will consume, where its merge fields are, and
//! which UTC instant a send time picked on the shop's wall clock refers to.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure functions and value types with no side effects
//! - **Ports**: Trait seams and configuration the UI layer depends on
//! - **Services**: Entry points that wire configuration and logging around
//!   the domain
//!
//! # Modules
//!
//! - [`message`]: Encoding classification, part counting and merge-field
//!   scanning
//! - [`schedule`]: Shop-local time to UTC resolution across IANA zones

pub mod message;
pub mod schedule;
