// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token normalization.
//!
//! Deliberately lightweight. Text splits on whitespace and hyphens, each piece
//! loses the punctuation hanging off its ends, and what remains is lowercased.
//! Interior punctuation stays: `Array.from` is one token, `array.from`, so a
//! query for the dotted name still finds it. No stemming, no stop words, no
//! diacritic folding. Documentation identifiers are not prose.

/// Is this character a separator between tokens?
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Is this character significant at the edge of a token?
///
/// Word characters are alphanumerics plus `_` and `$`, which identifiers use.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Trim insignificant punctuation from both ends of a token and lowercase it.
///
/// Returns an empty string when nothing significant remains.
///
/// ```
/// use docsift::util::normalize_token;
///
/// assert_eq!(normalize_token("(Foo)"), "foo");
/// assert_eq!(normalize_token("Array.from,"), "array.from");
/// assert_eq!(normalize_token("..."), "");
/// ```
pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !is_word_char(c)).to_lowercase()
}

/// Split text into normalized, non-empty tokens.
///
/// ```
/// use docsift::util::tokenize;
///
/// assert_eq!(tokenize("  Event-Emitter  on()"), vec!["event", "emitter", "on"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}
