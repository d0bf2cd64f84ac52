//! Default message segmenter.

use tracing::debug;

use crate::message::{
    domain::{self, EncodingResult, MessageSpan, Token},
    ports::{MessageSegmenter, SegmentationConfig},
};

/// Default implementation of [`MessageSegmenter`].
///
/// # Examples
///
/// ```
/// use campaign_core::message::domain::Encoding;
/// use campaign_core::message::ports::MessageSegmenter;
/// use campaign_core::message::services::DefaultMessageSegmenter;
///
/// let segmenter = DefaultMessageSegmenter::new();
/// let result = segmenter.classify("Flash sale 🔥");
/// assert_eq!(result.encoding, Encoding::Ucs2);
/// assert_eq!(result.parts, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageSegmenter {
    config: SegmentationConfig,
}

impl DefaultMessageSegmenter {
    /// Creates a segmenter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a segmenter with a custom configuration.
    #[must_use]
    pub const fn with_config(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &SegmentationConfig {
        &self.config
    }
}

impl MessageSegmenter for DefaultMessageSegmenter {
    fn classify(&self, message: &str) -> EncodingResult {
        let result = domain::classify_with_policy(message, self.config.empty_message_policy);
        debug!(
            count = result.count,
            encoding = %result.encoding,
            parts = result.parts,
            "classified message"
        );
        result
    }

    fn extract_tokens(&self, message: &str) -> Vec<Token> {
        domain::extract_tokens(message)
    }

    fn partition(&self, message: &str) -> Vec<MessageSpan> {
        domain::partition(message)
    }
}
