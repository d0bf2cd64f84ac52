//! SMS message classification and merge-field scanning.
//!
//! This module answers two questions about a draft SMS: how many transport
//! parts it will consume (and so what it will cost), and where its
//! `{{variable}}` merge fields are.
//!
//! # Architecture
//!
//! - **Domain**: Pure functions over message text ([`domain::classify`],
//!   [`domain::extract_tokens`], [`domain::partition`])
//! - **Ports**: The [`ports::MessageSegmenter`] seam and its configuration
//! - **Services**: [`services::DefaultMessageSegmenter`], the implementation
//!   the preview layer uses
//!
//! # Example
//!
//! ```
//! use campaign_core::message::domain::{Encoding, SpanKind};
//! use campaign_core::message::ports::MessageSegmenter;
//! use campaign_core::message::services::DefaultMessageSegmenter;
//!
//! let segmenter = DefaultMessageSegmenter::new();
//! let draft = "Hi {{first_name}}, your code is {{discount_code}}";
//!
//! let result = segmenter.classify(draft);
//! assert_eq!(result.encoding, Encoding::Gsm7Bit);
//! assert_eq!(result.parts, 1);
//!
//! let spans = segmenter.partition(draft);
//! assert_eq!(spans.len(), 4);
//! assert_eq!(spans[1].kind, SpanKind::Token);
//! ```

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
