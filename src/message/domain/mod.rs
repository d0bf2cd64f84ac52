//! Domain types for the message subsystem.
//!
//! Everything here is a pure function of the message text. Classification
//! and scanning are total: every string, including the empty one, has a
//! defined result.

mod alphabet;
mod encoding;
mod token;

pub use alphabet::{EXTENDED_CHARACTERS, is_extended_character, is_gsm_character, is_gsm_text};
pub use encoding::{
    EmptyMessagePolicy, Encoding, EncodingResult, GSM_MULTI_PART_LIMIT, GSM_SINGLE_PART_LIMIT,
    UCS2_MULTI_PART_LIMIT, UCS2_SINGLE_PART_LIMIT, classify, classify_with_policy,
    detect_encoding, weighted_length,
};
pub use token::{
    MessageSpan, SpanKind, Token, distinct_token_names, extract_tokens, partition,
};
