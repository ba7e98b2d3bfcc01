//! Logging utilities
//!
//! Helpers for echoing vendor payloads into log lines without flooding them

/// Default number of characters of a raw payload echoed into logs
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Truncate a string with a note about original length
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let total = s.chars().count();
            format!("{}... ({} chars truncated)", &s[..cut], total - max_chars)
        }
        None => s.to_string(),
    }
}

/// Render a raw vendor payload for a log line
///
/// Empty bodies are spelled out so the line is not mistaken for a missing field.
pub fn payload_preview(raw: &str, max_chars: usize) -> String {
    if raw.is_empty() {
        return "<empty>".to_string();
    }
    truncate_content(raw, max_chars)
}
