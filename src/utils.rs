//! Common utility functions shared across the codebase.

/// Truncates a translation value for inline display.
///
/// Values longer than `max_len` characters are cut and suffixed with an
/// ellipsis. Truncation is character-based, never mid-codepoint.
///
/// # Examples
///
/// ```
/// use glossa::utils::truncate_display;
///
/// assert_eq!(truncate_display("Submit", 40), "Submit");
/// assert_eq!(truncate_display("Hello world", 5), "Hello…");
/// assert_eq!(truncate_display("你好世界", 2), "你好…");
/// ```
pub fn truncate_display(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}…", cut)
}
