//! LLM response normalization library
//!
//! Turns the raw response envelope of any supported LLM vendor into one
//! validated translation result, with vendor errors mapped onto a closed
//! category set.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use handlers::{create_router, AppState};
pub use models::{TranslationResponse, UsageStats};
pub use providers::{create_adapter, VendorAdapter, VendorKind};
pub use services::{GraphTranslationParser, ResponseNormalizer, TranslationParser, VendorRegistry};
pub use utils::error::{AppError, AppResult, ErrorCategory, NormalizedError, ParseError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
