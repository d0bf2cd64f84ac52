//! GSM 03.38 default alphabet membership.
//!
//! SMS text that fits entirely inside the GSM 7-bit repertoire is billed at
//! the cheaper 7-bit rate. A handful of characters live in the extension
//! table and are transmitted as an escape plus the character, so they weigh
//! two septets each.

/// Characters that take an escape sequence and weigh two septets.
pub const EXTENDED_CHARACTERS: [char; 6] = ['{', '}', '|', '~', '€', '\\'];

/// Returns `true` if `character` belongs to the GSM 7-bit repertoire,
/// including the extension table.
///
/// # Examples
///
/// ```
/// use campaign_core::message::domain::is_gsm_character;
///
/// assert!(is_gsm_character('é'));
/// assert!(is_gsm_character('Δ'));
/// assert!(!is_gsm_character('😀'));
/// ```
#[must_use]
pub const fn is_gsm_character(character: char) -> bool {
    is_basic_character(character) || is_extension_character(character)
}

/// Returns `true` if `character` is one of the escaped characters that
/// counts twice towards the weighted length.
#[must_use]
pub const fn is_extended_character(character: char) -> bool {
    matches!(character, '{' | '}' | '|' | '~' | '€' | '\\')
}

/// Returns `true` if every character of `text` is in the GSM repertoire.
///
/// The decision is made for the whole message: one character outside the
/// repertoire moves every character to UCS-2.
#[must_use]
pub fn is_gsm_text(text: &str) -> bool {
    text.chars().all(is_gsm_character)
}

const fn is_basic_character(character: char) -> bool {
    matches!(
        character,
        'A'..='Z'
            | 'a'..='z'
            | '0'..='9'
            | ' '
            | '\n'
            | '\r'
            | '@'
            | '£'
            | '$'
            | '¥'
            | 'è'
            | 'é'
            | 'ù'
            | 'ì'
            | 'ò'
            | 'Ç'
            | 'Ø'
            | 'ø'
            | 'Å'
            | 'å'
            | 'Δ'
            | '_'
            | 'Φ'
            | 'Γ'
            | 'Λ'
            | 'Ω'
            | 'Π'
            | 'Ψ'
            | 'Σ'
            | 'Θ'
            | 'Ξ'
            | 'Æ'
            | 'æ'
            | 'ß'
            | 'É'
            | '!'
            | '"'
            | '#'
            | '¤'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '¡'
            | 'Ä'
            | 'Ö'
            | 'Ñ'
            | 'Ü'
            | '§'
            | '¿'
            | 'ä'
            | 'ö'
            | 'ñ'
            | 'ü'
            | 'à'
    )
}

// `^`, `[`, `]` and form feed are escaped on the air interface but count
// once here.
const fn is_extension_character(character: char) -> bool {
    is_extended_character(character) || matches!(character, '^' | '[' | ']' | '\u{c}')
}
