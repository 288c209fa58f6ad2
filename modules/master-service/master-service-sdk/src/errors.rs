//! Public error types for the master-service module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `MasterServiceApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MasterServiceError {
    /// The requested statistic cannot be computed over the current data.
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    /// The dataset already holds as many items as it allows.
    #[error("Dataset capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

impl MasterServiceError {
    /// Create an `InvalidOperation` error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Create a `CapacityExceeded` error.
    #[must_use]
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operation_display() {
        let err = MasterServiceError::invalid_operation("data source is empty");
        assert_eq!(err.to_string(), "Invalid operation: data source is empty");
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_capacity_exceeded_display() {
        let err = MasterServiceError::capacity_exceeded(10);
        assert_eq!(err.to_string(), "Dataset capacity of 10 exceeded");
        assert!(!err.is_invalid_operation());
    }
}
