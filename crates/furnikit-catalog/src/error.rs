//! Error types for the product catalog crate.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The requested profile was not found.
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// A profile with this id already exists.
    #[error("Profile already exists: {0}")]
    ProfileAlreadyExists(String),

    /// The profile data is internally inconsistent.
    #[error("Invalid profile {id}: {reason}")]
    InvalidProfile {
        /// The offending profile id.
        id: String,
        /// Why the profile was rejected.
        reason: String,
    },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
