use master_service_sdk::MasterServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Data source returned no data")]
    NullData,

    #[error("Data source is empty")]
    EmptyData,

    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },

    #[error("Dataset capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}

impl DomainError {
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Whether this error surfaces to callers as an invalid-operation failure.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            Self::NullData | Self::EmptyData | Self::Overflow { .. }
        )
    }
}

impl From<DomainError> for MasterServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CapacityExceeded { capacity } => Self::capacity_exceeded(capacity),
            other @ (DomainError::NullData
            | DomainError::EmptyData
            | DomainError::Overflow { .. }) => Self::invalid_operation(other.to_string()),
        }
    }
}
