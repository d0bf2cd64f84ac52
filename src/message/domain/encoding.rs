//! SMS encoding classification and part counting.
//!
//! A message is classified once as a whole, weighted, and then mapped onto
//! the concatenated-SMS thresholds. Single-part messages carry a larger
//! payload than each part of a concatenated message, because the user data
//! header of a concatenated part eats into the payload.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::alphabet::{is_extended_character, is_gsm_text};

/// Payload of a single GSM 7-bit SMS in septets.
pub const GSM_SINGLE_PART_LIMIT: usize = 160;
/// Payload of each part of a concatenated GSM 7-bit SMS.
pub const GSM_MULTI_PART_LIMIT: usize = 153;
/// Payload of a single UCS-2 SMS in characters.
pub const UCS2_SINGLE_PART_LIMIT: usize = 70;
/// Payload of each part of a concatenated UCS-2 SMS.
pub const UCS2_MULTI_PART_LIMIT: usize = 67;

/// The character encoding an SMS is transmitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// The GSM 03.38 default alphabet, seven bits per character.
    #[serde(rename = "GSM_7BIT")]
    Gsm7Bit,
    /// Sixteen bits per character, used when any character is outside GSM.
    #[serde(rename = "UCS2")]
    Ucs2,
}

impl Encoding {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gsm7Bit => "GSM_7BIT",
            Self::Ucs2 => "UCS2",
        }
    }

    /// Payload available when the message fits in one part.
    #[must_use]
    pub const fn single_part_limit(self) -> usize {
        match self {
            Self::Gsm7Bit => GSM_SINGLE_PART_LIMIT,
            Self::Ucs2 => UCS2_SINGLE_PART_LIMIT,
        }
    }

    /// Payload available in each part once the message is concatenated.
    #[must_use]
    pub const fn per_part_limit(self) -> usize {
        match self {
            Self::Gsm7Bit => GSM_MULTI_PART_LIMIT,
            Self::Ucs2 => UCS2_MULTI_PART_LIMIT,
        }
    }

    /// Number of parts needed to carry `weighted_length` characters.
    ///
    /// The explicit two- and three-part breakpoints are multiples of the
    /// per-part payload, so beyond one part this agrees with a ceiling
    /// division by the per-part payload.
    #[must_use]
    pub const fn parts_for(self, weighted_length: usize) -> usize {
        match self {
            Self::Gsm7Bit => match weighted_length {
                0..=160 => 1,
                161..=306 => 2,
                307..=459 => 3,
                _ => weighted_length.div_ceil(GSM_MULTI_PART_LIMIT),
            },
            Self::Ucs2 => match weighted_length {
                0..=70 => 1,
                71..=134 => 2,
                _ => weighted_length.div_ceil(UCS2_MULTI_PART_LIMIT),
            },
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an empty draft is counted.
///
/// The preview shows an empty draft as one part; billing-oriented callers
/// may prefer zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMessagePolicy {
    /// An empty message is reported as one part.
    #[default]
    OnePart,
    /// An empty message is reported as zero parts.
    ZeroParts,
}

/// The outcome of classifying a message.
///
/// Serialises as `{ "count": .., "encoding": "GSM_7BIT" | "UCS2", "parts": .. }`.
///
/// # Examples
///
/// ```
/// use campaign_core::message::domain::{Encoding, classify};
///
/// let result = classify("Sale ends at midnight {today}");
/// assert_eq!(result.encoding, Encoding::Gsm7Bit);
/// assert_eq!(result.count, 31);
/// assert_eq!(result.parts, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodingResult {
    /// Weighted character count.
    pub count: usize,
    /// Encoding the message will be sent with.
    pub encoding: Encoding,
    /// Number of transport parts.
    pub parts: usize,
}

impl EncodingResult {
    /// Total payload available across the current number of parts.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        if self.parts <= 1 {
            self.encoding.single_part_limit()
        } else {
            self.parts.saturating_mul(self.encoding.per_part_limit())
        }
    }

    /// Characters that can still be added before another part is needed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.count)
    }

    /// Returns `true` if the message needs concatenation.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        self.parts > 1
    }
}

/// Classifies `message` with the default empty-message policy.
#[must_use]
pub fn classify(message: &str) -> EncodingResult {
    classify_with_policy(message, EmptyMessagePolicy::default())
}

/// Classifies `message`, counting an empty draft according to `policy`.
#[must_use]
pub fn classify_with_policy(message: &str, policy: EmptyMessagePolicy) -> EncodingResult {
    if message.is_empty() {
        let parts = match policy {
            EmptyMessagePolicy::OnePart => 1,
            EmptyMessagePolicy::ZeroParts => 0,
        };
        return EncodingResult {
            count: 0,
            encoding: Encoding::Gsm7Bit,
            parts,
        };
    }

    let encoding = detect_encoding(message);
    let count = weighted_length(message, encoding);
    EncodingResult {
        count,
        encoding,
        parts: encoding.parts_for(count),
    }
}

/// Detects the encoding for the whole message.
#[must_use]
pub fn detect_encoding(message: &str) -> Encoding {
    if is_gsm_text(message) {
        Encoding::Gsm7Bit
    } else {
        Encoding::Ucs2
    }
}

/// Counts code points, adding one for each escaped character under GSM.
#[must_use]
pub fn weighted_length(message: &str, encoding: Encoding) -> usize {
    let length = message.chars().count();
    match encoding {
        Encoding::Gsm7Bit => {
            let escaped = message
                .chars()
                .filter(|character| is_extended_character(*character))
                .count();
            length.saturating_add(escaped)
        }
        Encoding::Ucs2 => length,
    }
}
