//! Data models module
//!
//! Defines the vendor-neutral result structures produced by the normalization pipeline

use serde::{Deserialize, Serialize};

pub mod translation;

pub use translation::{GraphCode, GraphTranslation, TranslationResponse};

/// Token usage statistics reported by a vendor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Input (prompt) token count
    pub input_tokens: u32,
    /// Output (completion) token count
    pub output_tokens: u32,
}

impl UsageStats {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total token count
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
