use std::sync::LazyLock;

use regex::Regex;

/// Matches a quoted dotted key candidate: two or more `[A-Za-z0-9_]+`
/// segments joined by `.`, enclosed in a matching pair of single or double
/// quotes. One alternative per quote kind, so an unterminated or
/// mismatched-quote sequence can never match.
///
/// The match is purely lexical so it works uniformly across markup and
/// code files, at the cost of false positives on dotted non-keys such as
/// version numbers ("1.2.3"). Callers filter those out by resolving the
/// candidate against a dictionary.
static KEY_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)+)"|'([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)+)'"#,
    )
    .unwrap()
});

/// One dotted-key candidate found in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'t> {
    /// Byte offset of the opening quote.
    pub start: usize,
    /// Length of the matched span, quotes included.
    pub len: usize,
    /// The key candidate without its quotes.
    pub key: &'t str,
}

/// Scans text for quoted dotted-key candidates.
///
/// The returned iterator is lazy; matches are produced in document order
/// as the caller pulls them.
pub fn key_candidates(text: &str) -> impl Iterator<Item = KeyMatch<'_>> {
    KEY_LITERAL_REGEX.captures_iter(text).filter_map(|caps| {
        let span = caps.get(0)?;
        let key = caps.get(1).or_else(|| caps.get(2))?;
        Some(KeyMatch {
            start: span.start(),
            len: span.len(),
            key: key.as_str(),
        })
    })
}

/// Whether a string is a well-formed dotted key path: one or more
/// `[A-Za-z0-9_]+` segments joined by `.`.
pub fn is_valid_key_path(key: &str) -> bool {
    !key.is_empty()
        && key.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
