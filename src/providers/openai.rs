//! OpenAI adapter
//!
//! Reads OpenAI chat-completion envelopes. Also serves OpenAI-compatible
//! vendors (DeepSeek, LM Studio, ...) under their own display label.

use super::{token_count, ErrorTaxonomy, VendorAdapter, VendorKind};
use crate::models::UsageStats;
use crate::utils::error::NormalizedError;
use serde_json::Value;

const TAXONOMY: ErrorTaxonomy = ErrorTaxonomy {
    type_field: "type",
    rate_limit: &["rate_limit"],
    invalid_request: &["invalid_request_error"],
    authentication: &["authentication"],
};

/// OpenAI-style envelope adapter
#[derive(Debug, Clone)]
pub struct OpenAIAdapter {
    label: String,
}

impl OpenAIAdapter {
    /// Create a new adapter with the given display label
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Default for OpenAIAdapter {
    fn default() -> Self {
        Self::new(VendorKind::OpenAI.default_label())
    }
}

impl VendorAdapter for OpenAIAdapter {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> VendorKind {
        VendorKind::OpenAI
    }

    /// `choices[0].message.content`
    fn raw_content<'a>(&self, envelope: &'a Value) -> Option<&'a str> {
        envelope
            .get("choices")?
            .as_array()?
            .first()?
            .get("message")?
            .get("content")?
            .as_str()
    }

    fn classify_error(&self, envelope: &Value) -> NormalizedError {
        TAXONOMY.classify(&self.label, envelope.get("error"))
    }

    fn extract_usage(&self, envelope: &Value) -> Option<UsageStats> {
        let usage = envelope.get("usage").filter(|u| u.is_object())?;
        Some(UsageStats::new(
            token_count(usage, "prompt_tokens"),
            token_count(usage, "completion_tokens"),
        ))
    }
}
