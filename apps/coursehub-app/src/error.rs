//! # API Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function  ──►  Result<T, ApiError>                             │
//! │         │                                                               │
//! │         ├── Catalog fetch failed? ── CatalogError ──► ApiError          │
//! │         │                                                               │
//! │         ├── Form invalid? ────────── ValidationError ─► ApiError        │
//! │         │                                                               │
//! │         └── Success ──────────────────────────────────────────────────► │
//! │                                                                         │
//! │  Frontend receives { "code": "CATALOG_UNAVAILABLE", "message": "..." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never produce an `ApiError`; they cannot fail.

use serde::Serialize;
use thiserror::Error;

use coursehub_catalog::CatalogError;
use coursehub_core::ValidationError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Course not found: 65f1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Course id not in the loaded catalog
    NotFound,

    /// Form input did not pass validation
    ValidationError,

    /// The catalog endpoint could not be reached or answered badly
    CatalogUnavailable,

    /// Bad configuration or other internal failure
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidConfig(msg) | CatalogError::ConfigLoad(msg) => {
                tracing::error!("Catalog configuration error: {}", msg);
                ApiError::internal("Application is misconfigured")
            }
            CatalogError::Status { status, message } => {
                tracing::warn!(status, "Catalog answered with an error");
                ApiError::new(ErrorCode::CatalogUnavailable, message)
            }
            CatalogError::Http(e) => {
                tracing::error!("Catalog request failed: {}", e);
                ApiError::new(ErrorCode::CatalogUnavailable, "Could not reach course catalog")
            }
            CatalogError::Decode(e) => {
                tracing::error!("Catalog response malformed: {}", e);
                ApiError::new(ErrorCode::CatalogUnavailable, "Course catalog returned bad data")
            }
        }
    }
}
