//! Library error types

use thiserror::Error;

/// Errors that can occur in the permission flow library
///
/// Platform denials are never errors; they are `Outcome` variants. This enum
/// only covers usage errors and registry teardown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// A permission was constructed from an empty name
    #[error("Permission name cannot be empty")]
    EmptyPermissionName,

    /// A request or query was issued with no permissions
    #[error("Permission set cannot be empty")]
    EmptyPermissionSet,

    /// The callback registry has been closed for teardown
    #[error("Callback registry is closed")]
    RegistryClosed,
}

/// Result type alias for permission flow operations
pub type PermissionResult<T> = Result<T, PermissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PermissionError::EmptyPermissionSet;
        assert_eq!(err.to_string(), "Permission set cannot be empty");

        let err = PermissionError::RegistryClosed;
        assert_eq!(err.to_string(), "Callback registry is closed");
    }
}
