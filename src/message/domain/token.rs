//! Merge-field scanning for `{{variable}}` placeholders.
//!
//! Placeholders are matched left to right in a single pass. A placeholder
//! opens with `{{`, carries a non-empty name without `}`, and is closed by
//! the first `}}` after the name. Nested or overlapping placeholders are not
//! recognised.

use serde::{Deserialize, Serialize};
use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A merge-field placeholder found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The placeholder text including its delimiters.
    pub full: String,
    /// The placeholder name with delimiters stripped.
    pub name: String,
    /// Zero-based byte offset of the placeholder in the source message.
    pub index: usize,
}

impl Token {
    /// Byte offset one past the end of the placeholder.
    #[must_use]
    pub fn end(&self) -> usize {
        self.index.saturating_add(self.full.len())
    }

    /// Byte range of the placeholder in the source message.
    ///
    /// # Examples
    ///
    /// ```
    /// use campaign_core::message::domain::extract_tokens;
    ///
    /// let message = "Hi {{first_name}}!";
    /// let tokens = extract_tokens(message);
    /// let token = tokens.first().expect("one token");
    /// assert_eq!(message.get(token.range()), Some("{{first_name}}"));
    /// ```
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.index..self.end()
    }
}

/// The kind of a [`MessageSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Literal text.
    Text,
    /// A merge-field placeholder.
    Token,
}

/// A contiguous piece of a message, either literal text or a placeholder.
///
/// Concatenating the `content` of every span returned by [`partition`]
/// reproduces the original message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageSpan {
    /// Whether the span is text or a placeholder.
    #[serde(rename = "type")]
    pub kind: SpanKind,
    /// The exact source text covered by the span.
    pub content: String,
    /// The placeholder name, present only for token spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MessageSpan {
    /// Creates a literal text span.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Text,
            content: content.into(),
            name: None,
        }
    }

    /// Creates a placeholder span from a scanned token.
    #[must_use]
    pub fn token(token: &Token) -> Self {
        Self {
            kind: SpanKind::Token,
            content: token.full.clone(),
            name: Some(token.name.clone()),
        }
    }

    /// Returns `true` for placeholder spans.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self.kind, SpanKind::Token)
    }
}

/// Extracts every placeholder from `message` in document order.
///
/// # Examples
///
/// ```
/// use campaign_core::message::domain::extract_tokens;
///
/// let tokens = extract_tokens("Hi {{first_name}}, code {{discount_code}}!");
/// let names: Vec<_> = tokens.iter().map(|token| token.name.as_str()).collect();
/// assert_eq!(names, ["first_name", "discount_code"]);
/// ```
#[must_use]
pub fn extract_tokens(message: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = message.get(cursor..).and_then(|rest| rest.find(OPEN)) {
        let start = cursor.saturating_add(found);
        match match_at(message, start) {
            Some(token) => {
                cursor = token.end();
                tokens.push(token);
            }
            // A failed match such as `{{}}` resumes one character on, so a `{{`
            // inside the rejected text is still found.
            None => cursor = next_char_boundary(message, start),
        }
    }

    tokens
}

/// Splits `message` into alternating text and placeholder spans.
///
/// A message without placeholders, including the empty message, yields a
/// single text span.
#[must_use]
pub fn partition(message: &str) -> Vec<MessageSpan> {
    let tokens = extract_tokens(message);
    if tokens.is_empty() {
        return vec![MessageSpan::text(message)];
    }

    let mut spans = Vec::with_capacity(tokens.len().saturating_mul(2).saturating_add(1));
    let mut cursor = 0;
    for token in &tokens {
        if let Some(gap) = message
            .get(cursor..token.index)
            .filter(|gap| !gap.is_empty())
        {
            spans.push(MessageSpan::text(gap));
        }
        spans.push(MessageSpan::token(token));
        cursor = token.end();
    }
    if let Some(tail) = message.get(cursor..).filter(|tail| !tail.is_empty()) {
        spans.push(MessageSpan::text(tail));
    }

    spans
}

/// Returns each distinct placeholder name once, in first-seen order.
#[must_use]
pub fn distinct_token_names(message: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in extract_tokens(message) {
        if !names.contains(&token.name) {
            names.push(token.name);
        }
    }
    names
}

fn match_at(message: &str, start: usize) -> Option<Token> {
    let name_start = start.saturating_add(OPEN.len());
    let after_open = message.get(name_start..)?;
    let name_len = after_open.find('}')?;
    if name_len == 0 {
        return None;
    }
    let name = after_open.get(..name_len)?;
    if !after_open.get(name_len..)?.starts_with(CLOSE) {
        return None;
    }
    let end = name_start.saturating_add(name_len).saturating_add(CLOSE.len());
    Some(Token {
        full: message.get(start..end)?.to_owned(),
        name: name.to_owned(),
        index: start,
    })
}

fn next_char_boundary(message: &str, position: usize) -> usize {
    message
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .map_or(message.len(), |character| {
            position.saturating_add(character.len_utf8())
        })
}
