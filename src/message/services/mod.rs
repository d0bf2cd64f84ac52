//! Application services for the message subsystem.

mod segmenter;

pub use segmenter::DefaultMessageSegmenter;
