//! # Catalog Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  Status                 │ │
//! │  │  ConfigLoad     │  │  (timeout,      │  │  Decode                 │ │
//! │  │                 │  │   refused, ...) │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these ever reach the cart. The home screen catches them and
//! shows a retry prompt.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoad(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection refused, timeout, TLS failure and the like.
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The endpoint answered with a non-2xx status.
    #[error("Catalog returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the expected course array.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Returns true if trying again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Http(_) => true,
            CatalogError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoad(err.to_string())
    }
}
