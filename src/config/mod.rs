//! Configuration management module
//!
//! Responsible for loading and managing application configuration, including environment variables and the vendor configuration file

pub mod file;
pub mod settings;

pub use file::{AppConfig, VendorConfig};
pub use settings::Settings;
