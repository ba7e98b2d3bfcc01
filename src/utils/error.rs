//! Error handling module
//!
//! Defines the pipeline error taxonomy and the service error types built on top of it

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Normalized vendor error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    RateLimited,
    InvalidRequest,
    AuthenticationFailed,
    Unknown,
}

impl ErrorCategory {
    /// Get category string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::RateLimited => "rate_limited",
            ErrorCategory::InvalidRequest => "invalid_request",
            ErrorCategory::AuthenticationFailed => "authentication_failed",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vendor-reported error translated into the closed category set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedError {
    /// Error category
    pub category: ErrorCategory,
    /// Human-readable message
    pub message: String,
}

impl NormalizedError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Normalization pipeline errors
///
/// Every failure of a parse call ends up as exactly one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input is not a JSON object
    #[error("Malformed {vendor} response: {reason}")]
    MalformedEnvelope { vendor: String, reason: String },

    /// Vendor explicitly signaled failure
    #[error("{0}")]
    VendorReported(NormalizedError),

    /// Envelope parsed but the answer field could not be located
    #[error("Failed to extract message content from {vendor} response")]
    ContentExtractionFailed { vendor: String },

    /// Extracted content rejected by the translation parser
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),
}

impl ParseError {
    /// Pipeline stage at which the failure happened
    pub fn stage(&self) -> &'static str {
        match self {
            ParseError::MalformedEnvelope { .. } => "deserialization",
            ParseError::VendorReported(_) => "vendor_error",
            ParseError::ContentExtractionFailed { .. } => "content_extraction",
            ParseError::SchemaValidation(_) => "schema_validation",
        }
    }

    /// Normalized category for vendor-reported errors
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            ParseError::VendorReported(e) => Some(e.category),
            _ => None,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Vendor response could not be normalized
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
    /// Normalized vendor error category (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Parse(ParseError::MalformedEnvelope { .. }) => StatusCode::BAD_REQUEST,
            AppError::Parse(ParseError::VendorReported(e)) => match e.category {
                ErrorCategory::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                ErrorCategory::AuthenticationFailed => StatusCode::UNAUTHORIZED,
                ErrorCategory::InvalidRequest => StatusCode::BAD_REQUEST,
                ErrorCategory::Unknown => StatusCode::BAD_GATEWAY,
            },
            AppError::Parse(ParseError::ContentExtractionFailed { .. })
            | AppError::Parse(ParseError::SchemaValidation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Parse(ParseError::MalformedEnvelope { .. }) => "malformed_envelope",
            AppError::Parse(ParseError::VendorReported(_)) => "vendor_error",
            AppError::Parse(ParseError::ContentExtractionFailed { .. }) => "content_extraction_failed",
            AppError::Parse(ParseError::SchemaValidation(_)) => "schema_validation_failed",
            AppError::NotFound(_) => "not_found_error",
        }
    }

    /// Whether detailed error information should be logged
    ///
    /// Parse failures were already reported by the pipeline itself.
    pub fn should_log_details(&self) -> bool {
        !matches!(self, AppError::Parse(_))
    }

    /// Convert to error response body
    pub fn to_error_response(&self) -> ErrorResponse {
        let category = match self {
            AppError::Parse(e) => e.category(),
            _ => None,
        };

        ErrorResponse {
            error: ErrorBody {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
                category,
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Normalization failed: {} - Status code: {}", self.error_type(), status);
        }

        let error_response = self.to_error_response();

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
