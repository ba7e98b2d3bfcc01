//! Response normalizer
//!
//! Shared parse driver for every vendor. The order of the steps is fixed:
//! deserialize the envelope, surface vendor errors, extract content, record
//! usage, then hand the content to the translation parser.

use crate::config::Settings;
use crate::models::TranslationResponse;
use crate::providers::VendorAdapter;
use crate::services::translation::{GraphTranslationParser, TranslationParser};
use crate::utils::error::ParseError;
use crate::utils::logging::{payload_preview, truncate_content, DEFAULT_PREVIEW_CHARS};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Response normalizer
///
/// Stateless between calls; cloning shares the translation parser.
#[derive(Clone)]
pub struct ResponseNormalizer {
    parser: Arc<dyn TranslationParser>,
    preview_chars: usize,
}

impl fmt::Debug for ResponseNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseNormalizer")
            .field("preview_chars", &self.preview_chars)
            .finish_non_exhaustive()
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(GraphTranslationParser::new()))
    }
}

impl ResponseNormalizer {
    /// Create a normalizer around a translation parser
    pub fn new(parser: Arc<dyn TranslationParser>) -> Self {
        Self {
            parser,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Create a normalizer with the graph translation parser and configured log limits
    pub fn from_settings(settings: &Settings) -> Self {
        Self::default().with_preview_chars(settings.logging.preview_chars)
    }

    /// Limit how much of a raw payload is echoed into log lines
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Parse a raw response body
    ///
    /// Bodies that are not valid UTF-8 fail as malformed envelopes.
    pub fn parse_bytes(
        &self,
        adapter: &dyn VendorAdapter,
        raw: &[u8],
    ) -> Result<TranslationResponse, ParseError> {
        match std::str::from_utf8(raw) {
            Ok(text) => self.parse(adapter, text),
            Err(e) => {
                let vendor = adapter.name();
                error!(category = vendor, "{} response body is not valid UTF-8: {}", vendor, e);
                Err(ParseError::MalformedEnvelope {
                    vendor: vendor.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Parse a vendor JSON response into the canonical translation result
    pub fn parse(
        &self,
        adapter: &dyn VendorAdapter,
        raw_json: &str,
    ) -> Result<TranslationResponse, ParseError> {
        let vendor = adapter.name();

        let envelope = self.deserialize_envelope(vendor, raw_json)?;

        if adapter.error_field_present(&envelope) {
            let normalized = adapter.classify_error(&envelope);
            error!(
                category = vendor,
                error_category = %normalized.category,
                "{}",
                normalized.message
            );
            return Err(ParseError::VendorReported(normalized));
        }

        let content = adapter.extract_content(&envelope).ok_or_else(|| {
            error!(category = vendor, "Failed to extract message content from {} response", vendor);
            ParseError::ContentExtractionFailed {
                vendor: vendor.to_string(),
            }
        })?;

        let usage = adapter.extract_usage(&envelope);
        if let Some(usage) = &usage {
            info!(
                category = vendor,
                "LLM Token Usage - Input: {} Output: {}",
                usage.input_tokens,
                usage.output_tokens
            );
        }

        debug!(
            category = vendor,
            "LLM Response Message Content: {}",
            truncate_content(&content, self.preview_chars)
        );

        let mut response = self.parser.parse(&content).map_err(|e| {
            error!(category = vendor, stage = e.stage(), "{} response rejected: {}", vendor, e);
            e
        })?;

        if let Some(usage) = usage {
            response.usage = usage;
        }

        info!(
            category = vendor,
            "Normalized {} response into {} graph translations",
            vendor,
            response.graphs.len()
        );

        Ok(response)
    }

    fn deserialize_envelope(&self, vendor: &str, raw_json: &str) -> Result<Value, ParseError> {
        let envelope: Value = serde_json::from_str(raw_json).map_err(|e| {
            error!(
                category = vendor,
                "Failed to parse {} response JSON: {} ({})",
                vendor,
                payload_preview(raw_json, self.preview_chars),
                e
            );
            ParseError::MalformedEnvelope {
                vendor: vendor.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !envelope.is_object() {
            error!(
                category = vendor,
                "{} response is not a JSON object: {}",
                vendor,
                payload_preview(raw_json, self.preview_chars)
            );
            return Err(ParseError::MalformedEnvelope {
                vendor: vendor.to_string(),
                reason: "top-level value is not a JSON object".to_string(),
            });
        }

        Ok(envelope)
    }
}
