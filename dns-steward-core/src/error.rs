//! Unified error type for the reconciliation layer.

use serde::Serialize;
use thiserror::Error;

// Re-export library error types
pub use dns_steward_provider::{ApiError, CredentialValidationError};

use crate::import::ImportError;

/// Core layer error type.
///
/// Drift conditions ("record absent", "already gone") are deliberately not
/// errors; they are outcome variants on the engine operations, so callers
/// must handle them explicitly.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A desired-state value failed field mapping or validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A malformed import identifier.
    #[error("{0}")]
    Import(#[from] ImportError),

    /// Credential resolution failed before any client was built.
    #[error("{0}")]
    CredentialValidation(#[from] CredentialValidationError),

    /// The named zone does not exist on the server.
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// API client error (transport, server-side, or decoding failure).
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, missing resource, …),
    /// used for log-level classification: `warn` when `true`, `error`
    /// otherwise. Update when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::Import(_)
            | Self::CredentialValidation(_)
            | Self::ZoneNotFound(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer `Result` alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
