//! Port trait definitions for the message subsystem.
//!
//! The UI layer depends on these seams rather than on the concrete
//! segmenter, so previews can be driven by a stub in its own tests.

pub mod segmenter;

pub use segmenter::{MessageSegmenter, SegmentationConfig};
