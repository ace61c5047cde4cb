//! Text normalization pipeline for search matching.
//!
//! Every match in the engine goes through the same three steps so that a
//! query, an ingredient filter and an indexed record all land in the same
//! surface form:
//!
//! 1. **Normalization** - Unicode NFD decomposition, combining marks
//!    stripped, lowercased, trimmed ("Fácil" → "facil")
//! 2. **Tokenization** - split on runs outside `[a-z0-9]`
//! 3. **Stemming** - heuristic removal of Spanish plural suffixes
//!    ("tacos" → "taco", "tomates" → "tomat")
//!
//! Normalization is deterministic and idempotent: the same visual text
//! always produces the same normalized form, which in turn produces the
//! same index entry.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for matching: strip diacritics, lowercase, trim.
///
/// NFD decomposition splits accented characters into a base character
/// plus combining marks, which are then dropped. Empty input yields an
/// empty string, and the function is idempotent.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split normalized text into alphanumeric tokens, left to right.
///
/// Any run of characters outside `[a-z0-9]` is a separator; empty tokens
/// are discarded. The input is expected to already be normalized.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Reduce a token to its stem by dropping Spanish plural suffixes.
///
/// Rules apply in order, first match wins:
/// 1. tokens of length <= 3 are returned unchanged
/// 2. ends in "es" and longer than 4 chars: drop the last two
/// 3. ends in "s" and longer than 3 chars: drop the last one
///
/// This is a heuristic for collapsing singular/plural surface forms, not
/// a linguistic stemmer. The output is never empty.
pub fn stem(token: &str) -> &str {
    let len = token.chars().count();
    if len <= 3 {
        return token;
    }
    if len > 4 && token.ends_with("es") {
        return &token[..token.len() - 2];
    }
    if token.ends_with('s') {
        return &token[..token.len() - 1];
    }
    token
}

/// Full pipeline: normalize, tokenize and stem, collecting owned stems.
pub fn stemmed_terms(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    tokenize(&normalized).map(|t| stem(t).to_string()).collect()
}
