//! Vendor registry
//!
//! Maps vendor names to adapters. Built once from configuration at startup
//! and shared read-only afterwards.

use crate::config::AppConfig;
use crate::providers::{create_adapter, VendorAdapter, VendorKind};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Registered vendor description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorInfo {
    /// Registry name (lowercase)
    pub name: String,
    /// Envelope family
    #[serde(rename = "type")]
    pub kind: VendorKind,
    /// Display label
    pub label: String,
}

/// Vendor registry
pub struct VendorRegistry {
    adapters: HashMap<String, Arc<dyn VendorAdapter>>,
}

impl VendorRegistry {
    /// Create a registry from configuration
    pub fn new(config: &AppConfig) -> Self {
        let adapters: HashMap<String, Arc<dyn VendorAdapter>> = config
            .vendors
            .iter()
            .map(|(name, vendor)| {
                let label = vendor
                    .label
                    .clone()
                    .unwrap_or_else(|| vendor.vendor_type.default_label().to_string());
                debug!("Registering vendor '{}' ({}) as {}", name, label, vendor.vendor_type);
                (name.to_lowercase(), create_adapter(vendor.vendor_type, label))
            })
            .collect();

        info!("Vendor registry initialized with {} vendors", adapters.len());

        Self { adapters }
    }

    /// Registry with the built-in vendor set
    pub fn builtin() -> Self {
        Self::new(&AppConfig::default())
    }

    /// Look up an adapter by vendor name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn VendorAdapter>> {
        self.adapters.get(&name.to_lowercase()).cloned()
    }

    /// Look up an adapter, failing with a not-found error
    pub fn resolve(&self, name: &str) -> AppResult<Arc<dyn VendorAdapter>> {
        self.get(name)
            .ok_or_else(|| AppError::NotFound(format!("vendor '{}'", name)))
    }

    /// Registered vendors sorted by name
    pub fn list(&self) -> Vec<VendorInfo> {
        let mut vendors: Vec<VendorInfo> = self
            .adapters
            .iter()
            .map(|(name, adapter)| VendorInfo {
                name: name.clone(),
                kind: adapter.kind(),
                label: adapter.name().to_string(),
            })
            .collect();
        vendors.sort_by(|a, b| a.name.cmp(&b.name));
        vendors
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
