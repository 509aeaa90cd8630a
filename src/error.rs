//! Error types for emergency flag operations

use thiserror::Error;

/// Errors that can occur during emergency flag operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyError {
    /// Emergency id outside the valid range `[0, 63]`
    #[error("Invalid emergency id: {id} (must be 0-63)")]
    InvalidId {
        /// Rejected id
        id: u8,
    },

    /// Module guard already passed — `class_init` accepts exactly one call
    #[error("Emergency module already initialized")]
    AlreadyInitialized,
}

/// Result type for emergency flag operations
pub type EmergencyResult<T> = Result<T, EmergencyError>;
