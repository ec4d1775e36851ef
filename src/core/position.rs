//! Positional resolution between dictionary text and dotted key paths.
//!
//! Both directions are textual, not grammar-based:
//!
//! - [`key_path_at`] infers the key path enclosing a cursor position from
//!   line/indentation structure. It assumes the conventional one-key-per-line
//!   formatting that pretty-printed dictionaries have; minified or
//!   multi-key-per-line documents resolve incorrectly or not at all. The
//!   alternative (a position-tracking JSON parser) was rejected as not worth
//!   the complexity for conventionally formatted files.
//! - [`locate_key`] finds the textual position of a dotted key path by
//!   matching each segment as a quoted key in nested order.

/// A resolved position inside a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLocation {
    /// Byte offset of the terminal key's opening quote.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub col: usize,
}

/// Infers the dotted key path enclosing a cursor position.
///
/// `line_index` and `column` are 0-based. The target line must contain a
/// `:` separator and the cursor must sit at or before it; a cursor after
/// the separator addresses the value, not the key, and resolves to `None`.
/// Ancestors are discovered by walking upward over lines with strictly
/// smaller indentation (spaces count 1, tabs count 4) that carry a key of
/// their own.
pub fn key_path_at(text: &str, line_index: usize, column: usize) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let target = *lines.get(line_index)?;

    let separator = target.find(':')?;
    if column > separator {
        return None;
    }
    let leaf = key_token(&target[..separator])?;

    let mut segments = vec![leaf];
    let mut indent = indent_width(target);
    for prior in lines[..line_index].iter().rev() {
        let prior_indent = indent_width(prior);
        if prior_indent < indent
            && let Some(sep) = prior.find(':')
            && let Some(key) = key_token(&prior[..sep])
        {
            segments.push(key);
            indent = prior_indent;
        }
    }

    segments.reverse();
    Some(segments.join("."))
}

/// Finds the textual position of a dotted key path in dictionary text.
///
/// Each path segment must appear as a quoted key (followed by optional
/// whitespace and `:`); the search cursor advances past each match so
/// segments are matched in nesting order without backtracking. Returns
/// `None` as soon as any segment cannot be found, which callers treat as
/// "key absent from this file".
pub fn locate_key(content: &str, key_path: &str) -> Option<KeyLocation> {
    let mut cursor = 0usize;
    let mut terminal = None;

    for segment in key_path.split('.') {
        let needle = format!("\"{}\"", segment);
        let found = find_key_occurrence(&content[cursor..], &needle)?;
        let offset = cursor + found;
        terminal = Some(offset);
        cursor = offset + needle.len();
    }

    let offset = terminal?;
    let line_starts = line_start_offsets(content);
    let (line, col) = line_col(&line_starts, offset);
    Some(KeyLocation { offset, line, col })
}

/// Finds the first occurrence of `needle` that is a JSON key, i.e. is
/// followed by optional whitespace and a colon. Matches inside string
/// values are skipped.
fn find_key_occurrence(haystack: &str, needle: &str) -> Option<usize> {
    let mut pos = 0;
    while let Some(rel) = haystack[pos..].find(needle) {
        let start = pos + rel;
        let after = start + needle.len();
        if haystack[after..].trim_start().starts_with(':') {
            return Some(start);
        }
        pos = start + 1;
    }
    None
}

/// Byte offsets at which each line starts. Line 1 starts at offset 0.
pub fn line_start_offsets(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Maps a byte offset to a 1-based `(line, col)` pair via binary search
/// over the line start index.
pub fn line_col(line_starts: &[usize], offset: usize) -> (usize, usize) {
    let line = match line_starts.binary_search(&offset) {
        Ok(index) => index + 1,
        Err(index) => index,
    };
    let col = offset - line_starts[line - 1] + 1;
    (line, col)
}

/// Indentation width of a line: each space counts 1, each tab counts 4.
fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// Extracts a key token: the text before the separator, trimmed, with one
/// layer of surrounding matching quotes stripped. Empty tokens yield `None`.
fn key_token(raw: &str) -> Option<&str> {
    let token = strip_matching_quotes(raw.trim());
    if token.is_empty() { None } else { Some(token) }
}

fn strip_matching_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}
