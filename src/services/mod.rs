//! Service layer module
//!
//! Contains content normalization, the shared parse driver, the translation
//! parser and the vendor registry

pub mod content;
pub mod normalizer;
pub mod registry;
pub mod translation;

pub use normalizer::ResponseNormalizer;
pub use registry::{VendorInfo, VendorRegistry};
pub use translation::{GraphTranslationParser, TranslationParser};
