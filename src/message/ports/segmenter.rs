//! Segmenter port for live message previews.
//!
//! Defines the interface the preview layer calls on every keystroke, plus
//! the configuration that tunes it.

use serde::{Deserialize, Serialize};

use crate::message::domain::{EmptyMessagePolicy, EncodingResult, MessageSpan, Token};

/// Port for classifying and scanning draft SMS text.
///
/// # Implementation Notes
///
/// Implementations must be stateless, total over all inputs and safe to
/// call concurrently. They never fail.
pub trait MessageSegmenter: Send + Sync {
    /// Classifies the encoding, weighted length and part count of `message`.
    fn classify(&self, message: &str) -> EncodingResult;

    /// Extracts merge-field placeholders in document order.
    fn extract_tokens(&self, message: &str) -> Vec<Token>;

    /// Splits `message` into text and placeholder spans for highlighting.
    fn partition(&self, message: &str) -> Vec<MessageSpan>;
}

/// Configuration for message segmentation.
///
/// # Examples
///
/// ```
/// use campaign_core::message::domain::EmptyMessagePolicy;
/// use campaign_core::message::ports::SegmentationConfig;
///
/// let config = SegmentationConfig::default();
/// assert_eq!(config.empty_message_policy, EmptyMessagePolicy::OnePart);
///
/// let billing = SegmentationConfig::billing();
/// assert_eq!(billing.empty_message_policy, EmptyMessagePolicy::ZeroParts);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// How an empty draft is counted.
    pub empty_message_policy: EmptyMessagePolicy,
}

impl SegmentationConfig {
    /// Creates the configuration used by the composer preview.
    ///
    /// An empty draft still shows as one part.
    #[must_use]
    pub const fn preview() -> Self {
        Self {
            empty_message_policy: EmptyMessagePolicy::OnePart,
        }
    }

    /// Creates a configuration for cost estimates, where nothing to send
    /// costs nothing.
    #[must_use]
    pub const fn billing() -> Self {
        Self {
            empty_message_policy: EmptyMessagePolicy::ZeroParts,
        }
    }
}
