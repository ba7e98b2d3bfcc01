//! Health check handlers
//!
//! Provides application health status check endpoints

use crate::handlers::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "alive"
    pub status: String,
    pub service: String,
    pub version: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Vendor registry status
    pub vendors: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Memory usage (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<MemoryUsage>,
}

/// Memory usage information
#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Resident memory in bytes
    pub used_bytes: u64,
    /// Virtual memory in bytes
    pub total_bytes: u64,
    /// Usage percentage
    pub usage_percent: f64,
}

/// Basic health check
///
/// GET /health
/// Reports whether any vendors are registered; returns 503 when the registry is empty
pub async fn health_check(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, StatusCode> {
    debug!("Executing health check");

    let vendor_count = state.registry.len();
    if vendor_count == 0 {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let response = HealthResponse {
        status: "healthy".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            vendors: format!("{} vendors registered", vendor_count),
            uptime_seconds: get_uptime_seconds(),
            memory_usage: get_memory_usage(),
        }),
    };

    Ok(Json(response))
}

/// Liveness check
///
/// GET /health/live
/// Check if the service is still running
pub async fn liveness_check() -> Json<HealthResponse> {
    debug!("Executing liveness check");

    Json(HealthResponse {
        status: "alive".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: None,
    })
}

/// Seconds since the uptime clock was first read
pub(crate) fn get_uptime_seconds() -> u64 {
    static STARTED: OnceLock<Instant> = OnceLock::new();
    STARTED.get_or_init(Instant::now).elapsed().as_secs()
}

/// Get memory usage information from /proc (Linux only)
fn get_memory_usage() -> Option<MemoryUsage> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;

    let used = proc_status_bytes(&status, "VmRSS:")?;
    let total = proc_status_bytes(&status, "VmSize:")?;
    let usage_percent = if total > 0 {
        (used as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    Some(MemoryUsage {
        used_bytes: used,
        total_bytes: total,
        usage_percent,
    })
}

/// Read a `kB` line such as `VmRSS:   1234 kB` as bytes
fn proc_status_bytes(status: &str, key: &str) -> Option<u64> {
    let line = status.lines().find(|line| line.starts_with(key))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}
