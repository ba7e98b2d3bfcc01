//! Anthropic adapter
//!
//! Reads Anthropic Messages API envelopes

use super::{token_count, ErrorTaxonomy, VendorAdapter, VendorKind};
use crate::models::UsageStats;
use crate::utils::error::NormalizedError;
use serde_json::Value;

const TAXONOMY: ErrorTaxonomy = ErrorTaxonomy {
    type_field: "type",
    rate_limit: &["rate_limit"],
    invalid_request: &["invalid_request"],
    authentication: &["authentication"],
};

/// Anthropic envelope adapter
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    label: String,
}

impl AnthropicAdapter {
    /// Create a new adapter with the given display label
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Default for AnthropicAdapter {
    fn default() -> Self {
        Self::new(VendorKind::Anthropic.default_label())
    }
}

impl VendorAdapter for AnthropicAdapter {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> VendorKind {
        VendorKind::Anthropic
    }

    /// `content[0].text`
    fn raw_content<'a>(&self, envelope: &'a Value) -> Option<&'a str> {
        envelope
            .get("content")?
            .as_array()?
            .first()?
            .get("text")?
            .as_str()
    }

    /// Anthropic marks error envelopes with `"type": "error"` as well as the `error` object
    fn error_field_present(&self, envelope: &Value) -> bool {
        envelope.get("error").is_some()
            || envelope.get("type").and_then(Value::as_str) == Some("error")
    }

    fn classify_error(&self, envelope: &Value) -> NormalizedError {
        TAXONOMY.classify(&self.label, envelope.get("error"))
    }

    fn extract_usage(&self, envelope: &Value) -> Option<UsageStats> {
        let usage = envelope.get("usage").filter(|u| u.is_object())?;
        Some(UsageStats::new(
            token_count(usage, "input_tokens"),
            token_count(usage, "output_tokens"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use serde_json::json;

    #[test]
    fn test_raw_content_first_block() {
        let adapter = AnthropicAdapter::default();
        let envelope = json!({
            "type": "message",
            "content": [{"type": "text", "text": "{\"graphs\": []}"}],
            "usage": {"input_tokens": 3, "output_tokens": 4}
        });
        assert_eq!(adapter.raw_content(&envelope), Some("{\"graphs\": []}"));
        assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(3, 4)));
    }

    #[test]
    fn test_error_type_marker_without_error_object() {
        let adapter = AnthropicAdapter::default();
        let envelope = json!({"type": "error"});
        assert!(adapter.error_field_present(&envelope));

        let error = adapter.classify_error(&envelope);
        assert_eq!(error.category, ErrorCategory::Unknown);
        assert_eq!(error.message, "Anthropic API error: unknown - unknown");
    }

    #[test]
    fn test_null_error_field_is_an_error() {
        let adapter = AnthropicAdapter::default();
        let envelope = json!({"error": null, "content": [{"type": "text", "text": "{}"}]});
        assert!(adapter.error_field_present(&envelope));
        assert_eq!(adapter.classify_error(&envelope).message, "Anthropic API error: unknown - unknown");
    }

    #[test]
    fn test_classify_invalid_request() {
        let adapter = AnthropicAdapter::default();
        let error = adapter.classify_error(&json!({
            "type": "error",
            "error": {"type": "invalid_request_error", "message": "messages: field required"}
        }));
        assert_eq!(error.category, ErrorCategory::InvalidRequest);
        assert_eq!(error.message, "Invalid request: messages: field required");
    }
}
