//! Normalization handlers
//!
//! Accept a raw vendor response body and return the canonical translation result

use crate::handlers::AppState;
use crate::models::TranslationResponse;
use crate::services::VendorInfo;
use crate::utils::error::AppResult;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Handle a vendor response
///
/// POST /v1/normalize/:vendor
///
/// The body is the vendor's response exactly as received from its API.
pub async fn handle_normalize(
    State(state): State<Arc<AppState>>,
    Path(vendor): Path<String>,
    body: Bytes,
) -> AppResult<Json<TranslationResponse>> {
    debug!("Received {} byte response body for vendor '{}'", body.len(), vendor);

    let adapter = state.registry.resolve(&vendor)?;
    let response = state.normalizer.parse_bytes(adapter.as_ref(), &body)?;

    Ok(Json(response))
}

/// Vendor listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct VendorListResponse {
    pub vendors: Vec<VendorInfo>,
}

/// List registered vendors
///
/// GET /v1/vendors
pub async fn list_vendors(State(state): State<Arc<AppState>>) -> Json<VendorListResponse> {
    Json(VendorListResponse {
        vendors: state.registry.list(),
    })
}
