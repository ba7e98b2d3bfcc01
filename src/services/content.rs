//! Content normalization
//!
//! Recovers the JSON payload from a model answer that may be wrapped in
//! markdown code fences or surrounded by prose.

use serde::de::IgnoredAny;
use tracing::debug;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Strip a code fence that wraps the whole text
///
/// Accepts a fence tagged `json` (any ASCII case) or an untagged fence.
/// Fences tagged with another language are left alone. Returns the trimmed
/// inner text.
pub fn strip_code_fence(text: &str) -> Option<&str> {
    let inner = text.strip_prefix(FENCE)?.strip_suffix(FENCE)?;
    fence_body(inner)
}

/// Find the first `json`-tagged fenced block embedded in surrounding prose
pub fn find_embedded_json_block(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets valid for `text`
    let lower = text.to_ascii_lowercase();
    let marker = format!("{}{}", FENCE, JSON_TAG);

    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find(&marker) {
        let body_start = search_from + found + marker.len();
        let rest = &text[body_start..];
        if rest.starts_with(char::is_whitespace) {
            let end = rest.find(FENCE)?;
            return Some(rest[..end].trim());
        }
        search_from = body_start;
    }

    None
}

/// Turn a raw answer into the candidate payload
///
/// Trims whitespace, strips a wrapping fence (or lifts a fenced JSON block out
/// of prose) and rejects empty results.
pub fn normalize_content(raw: &str, vendor: &str) -> Option<String> {
    let trimmed = raw.trim();

    let content = if let Some(inner) = strip_code_fence(trimmed) {
        debug!(category = vendor, "Stripped JSON markers from {} response", vendor);
        inner
    } else if is_json_document(trimmed) {
        trimmed
    } else if let Some(inner) = find_embedded_json_block(trimmed) {
        debug!(category = vendor, "Recovered fenced JSON block from prose in {} response", vendor);
        inner
    } else {
        trimmed
    };

    if content.is_empty() {
        debug!(category = vendor, "{} response content is empty", vendor);
        return None;
    }

    Some(content.to_string())
}

/// Whether the text already parses as a complete JSON document
fn is_json_document(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

fn fence_body(inner: &str) -> Option<&str> {
    let after_tag = match inner.get(..JSON_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &inner[JSON_TAG.len()..],
        _ => inner,
    };

    // Anything glued to the opening marker other than JSON itself is a foreign language tag
    if !after_tag.is_empty() && !after_tag.starts_with(|c: char| c.is_whitespace() || c == '{' || c == '[') {
        return None;
    }

    Some(after_tag.trim())
}
