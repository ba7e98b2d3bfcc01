//! Gemini adapter
//!
//! Reads Gemini `generateContent` envelopes. Errors follow the Google RPC
//! shape, so the taxonomy is matched against `status` rather than `type`.

use super::{token_count, ErrorTaxonomy, VendorAdapter, VendorKind};
use crate::models::UsageStats;
use crate::utils::error::NormalizedError;
use serde_json::Value;

const TAXONOMY: ErrorTaxonomy = ErrorTaxonomy {
    type_field: "status",
    rate_limit: &["RESOURCE_EXHAUSTED"],
    invalid_request: &["INVALID_ARGUMENT", "FAILED_PRECONDITION"],
    authentication: &["UNAUTHENTICATED", "PERMISSION_DENIED"],
};

/// Gemini envelope adapter
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    label: String,
}

impl GeminiAdapter {
    /// Create a new adapter with the given display label
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new(VendorKind::Gemini.default_label())
    }
}

impl VendorAdapter for GeminiAdapter {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> VendorKind {
        VendorKind::Gemini
    }

    /// `candidates[0].content.parts[0].text`
    fn raw_content<'a>(&self, envelope: &'a Value) -> Option<&'a str> {
        envelope
            .get("candidates")?
            .as_array()?
            .first()?
            .get("content")?
            .get("parts")?
            .as_array()?
            .first()?
            .get("text")?
            .as_str()
    }

    fn classify_error(&self, envelope: &Value) -> NormalizedError {
        TAXONOMY.classify(&self.label, envelope.get("error"))
    }

    fn extract_usage(&self, envelope: &Value) -> Option<UsageStats> {
        let usage = envelope.get("usageMetadata").filter(|u| u.is_object())?;
        Some(UsageStats::new(
            token_count(usage, "promptTokenCount"),
            token_count(usage, "candidatesTokenCount"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use serde_json::json;

    #[test]
    fn test_raw_content_path() {
        let adapter = GeminiAdapter::default();
        let envelope = json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "answer"}]}}],
            "usageMetadata": {"promptTokenCount": 11, "candidatesTokenCount": 22, "totalTokenCount": 33}
        });
        assert_eq!(adapter.raw_content(&envelope), Some("answer"));
        assert_eq!(adapter.extract_usage(&envelope), Some(UsageStats::new(11, 22)));
    }

    #[test]
    fn test_empty_parts() {
        let adapter = GeminiAdapter::default();
        let envelope = json!({"candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]});
        assert_eq!(adapter.raw_content(&envelope), None);
    }

    #[test]
    fn test_classify_status() {
        let adapter = GeminiAdapter::default();

        let error = adapter.classify_error(&json!({
            "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
        }));
        assert_eq!(error.category, ErrorCategory::RateLimited);
        assert_eq!(error.message, "Gemini API rate limit exceeded");

        let error = adapter.classify_error(&json!({
            "error": {"code": 403, "message": "denied", "status": "PERMISSION_DENIED"}
        }));
        assert_eq!(error.category, ErrorCategory::AuthenticationFailed);

        let error = adapter.classify_error(&json!({
            "error": {"code": 500, "message": "internal", "status": "INTERNAL"}
        }));
        assert_eq!(error.message, "Gemini API error: INTERNAL - internal");
    }
}
