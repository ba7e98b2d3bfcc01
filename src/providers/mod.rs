//! Vendor adapter module
//!
//! Defines the VendorAdapter trait and one adapter per vendor envelope family.
//! Adapters only know how to read their own envelope; the shared driver in
//! `services::normalizer` fixes the order in which they are consulted.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

use crate::models::UsageStats;
use crate::services::content::normalize_content;
use crate::utils::error::{ErrorCategory, NormalizedError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use anthropic::AnthropicAdapter;
pub use gemini::GeminiAdapter;
pub use ollama::OllamaAdapter;
pub use openai::OpenAIAdapter;

/// Placeholder for vendor error fields that could not be read
const UNKNOWN_FIELD: &str = "unknown";

/// Vendor envelope family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorKind {
    OpenAI,
    Anthropic,
    Gemini,
    Ollama,
}

impl VendorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorKind::OpenAI => "openai",
            VendorKind::Anthropic => "anthropic",
            VendorKind::Gemini => "gemini",
            VendorKind::Ollama => "ollama",
        }
    }

    /// Display label used when configuration does not name one
    pub fn default_label(&self) -> &'static str {
        match self {
            VendorKind::OpenAI => "OpenAI",
            VendorKind::Anthropic => "Anthropic",
            VendorKind::Gemini => "Gemini",
            VendorKind::Ollama => "Ollama",
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(VendorKind::OpenAI),
            "anthropic" => Ok(VendorKind::Anthropic),
            "gemini" => Ok(VendorKind::Gemini),
            "ollama" => Ok(VendorKind::Ollama),
            other => Err(format!("unknown vendor type: {}", other)),
        }
    }
}

/// Vendor adapter trait
///
/// All vendors implement this trait. Every method is total over arbitrary
/// JSON: a missing or wrong-typed field degrades to `None`, never a panic.
pub trait VendorAdapter: Send + Sync {
    /// Display label used in log lines and normalized messages
    fn name(&self) -> &str;

    /// Envelope family
    fn kind(&self) -> VendorKind;

    /// Locate the model's raw answer text inside the envelope
    fn raw_content<'a>(&self, envelope: &'a Value) -> Option<&'a str>;

    /// Map the vendor's error object into the normalized category set
    fn classify_error(&self, envelope: &Value) -> NormalizedError;

    /// Read token counts from the usage block, if the envelope has one
    fn extract_usage(&self, envelope: &Value) -> Option<UsageStats>;

    /// Whether the envelope carries a vendor-reported error
    ///
    /// Presence of the key is what counts; `"error": null` still fails the parse.
    fn error_field_present(&self, envelope: &Value) -> bool {
        envelope.get("error").is_some()
    }

    /// Extract the candidate payload: raw answer with fences stripped and whitespace trimmed
    ///
    /// Returns `None` when the answer field is missing or the payload is empty.
    fn extract_content(&self, envelope: &Value) -> Option<String> {
        let raw = self.raw_content(envelope)?;
        normalize_content(raw, self.name())
    }
}

/// Substring indicators for one vendor's error taxonomy
///
/// Matching is contains-based so that versioned or suffixed type strings
/// (`rate_limit_exceeded`, `tokens_rate_limit`) still land in the right bucket.
#[derive(Debug, Clone, Copy)]
pub struct ErrorTaxonomy {
    /// Field of the error object holding the type string
    pub type_field: &'static str,
    pub rate_limit: &'static [&'static str],
    pub invalid_request: &'static [&'static str],
    pub authentication: &'static [&'static str],
}

impl ErrorTaxonomy {
    /// Category for a vendor type string; checked in rate-limit, invalid-request, authentication order
    pub fn category_for(&self, error_type: &str) -> ErrorCategory {
        let matches = |indicators: &[&str]| indicators.iter().any(|i| error_type.contains(i));

        if matches(self.rate_limit) {
            ErrorCategory::RateLimited
        } else if matches(self.invalid_request) {
            ErrorCategory::InvalidRequest
        } else if matches(self.authentication) {
            ErrorCategory::AuthenticationFailed
        } else {
            ErrorCategory::Unknown
        }
    }

    /// Classify a vendor error object
    ///
    /// A missing or non-object `error` value yields an `Unknown` error with placeholders.
    pub fn classify(&self, vendor: &str, error: Option<&Value>) -> NormalizedError {
        let error_type = error.and_then(|e| string_field(e, self.type_field));
        let message = error.and_then(|e| string_field(e, "message"));
        self.normalize(vendor, error_type, message)
    }

    /// Build the normalized error from whatever fields could be read
    pub fn normalize(&self, vendor: &str, error_type: Option<&str>, message: Option<&str>) -> NormalizedError {
        let category = error_type
            .map(|t| self.category_for(t))
            .unwrap_or(ErrorCategory::Unknown);

        let text = match category {
            ErrorCategory::RateLimited => format!("{} API rate limit exceeded", vendor),
            ErrorCategory::InvalidRequest => {
                format!("Invalid request: {}", message.unwrap_or(UNKNOWN_FIELD))
            }
            ErrorCategory::AuthenticationFailed => format!("{} API authentication failed", vendor),
            ErrorCategory::Unknown => format!(
                "{} API error: {} - {}",
                vendor,
                error_type.unwrap_or(UNKNOWN_FIELD),
                message.unwrap_or(UNKNOWN_FIELD)
            ),
        };

        NormalizedError::new(category, text)
    }
}

/// Read a non-empty string field
pub(crate) fn string_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Read a token count; absent, negative, fractional or oversized values count as zero
///
/// Integral floats such as `10.0` are accepted.
pub(crate) fn token_count(value: &Value, field: &str) -> u32 {
    let Some(number) = value.get(field) else {
        return 0;
    };

    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        })
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Create an adapter for a vendor family with the given display label
pub fn create_adapter(kind: VendorKind, label: impl Into<String>) -> Arc<dyn VendorAdapter> {
    let label = label.into();
    match kind {
        VendorKind::OpenAI => Arc::new(OpenAIAdapter::new(label)),
        VendorKind::Anthropic => Arc::new(AnthropicAdapter::new(label)),
        VendorKind::Gemini => Arc::new(GeminiAdapter::new(label)),
        VendorKind::Ollama => Arc::new(OllamaAdapter::new(label)),
    }
}
