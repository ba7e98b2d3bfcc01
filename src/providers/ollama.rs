//! Ollama adapter
//!
//! Reads local Ollama `/api/chat` and `/api/generate` envelopes

use super::{string_field, token_count, ErrorTaxonomy, VendorAdapter, VendorKind};
use crate::models::UsageStats;
use crate::utils::error::NormalizedError;
use serde_json::Value;

// Ollama reports errors as a bare string with no type field to match against.
const TAXONOMY: ErrorTaxonomy = ErrorTaxonomy {
    type_field: "type",
    rate_limit: &[],
    invalid_request: &[],
    authentication: &[],
};

/// Ollama envelope adapter
#[derive(Debug, Clone)]
pub struct OllamaAdapter {
    label: String,
}

impl OllamaAdapter {
    /// Create a new adapter with the given display label
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl Default for OllamaAdapter {
    fn default() -> Self {
        Self::new(VendorKind::Ollama.default_label())
    }
}

impl VendorAdapter for OllamaAdapter {
    fn name(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> VendorKind {
        VendorKind::Ollama
    }

    /// `message.content` for chat, `response` for generate
    fn raw_content<'a>(&self, envelope: &'a Value) -> Option<&'a str> {
        envelope
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
            .or_else(|| envelope.get("response").and_then(Value::as_str))
    }

    fn classify_error(&self, envelope: &Value) -> NormalizedError {
        match envelope.get("error") {
            Some(Value::String(message)) if !message.is_empty() => {
                TAXONOMY.normalize(&self.label, None, Some(message.as_str()))
            }
            Some(error) => TAXONOMY.normalize(
                &self.label,
                string_field(error, TAXONOMY.type_field),
                string_field(error, "message"),
            ),
            None => TAXONOMY.normalize(&self.label, None, None),
        }
    }

    /// Counts are top-level; the block is present if either one is
    fn extract_usage(&self, envelope: &Value) -> Option<UsageStats> {
        if envelope.get("prompt_eval_count").is_none() && envelope.get("eval_count").is_none() {
            return None;
        }
        Some(UsageStats::new(
            token_count(envelope, "prompt_eval_count"),
            token_count(envelope, "eval_count"),
        ))
    }
}
