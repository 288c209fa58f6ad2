//! Master service API trait
//!
//! Contract trait for consumers of the master service.

use crate::errors::MasterServiceError;
use crate::models::Stats;

/// Master service API trait.
///
/// Every call reads a fresh snapshot of the underlying dataset. Nothing is
/// cached between calls.
pub trait MasterServiceApi: Send + Sync {
    /// Arithmetic mean of the dataset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the dataset is absent or empty.
    fn average(&self) -> Result<f64, MasterServiceError>;

    /// Square of the dataset maximum.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the dataset is empty or the square overflows.
    fn max_square(&self) -> Result<i64, MasterServiceError>;

    /// Sum of the dataset, doubled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperation` if the dataset is absent, empty, or the
    /// result overflows.
    fn double_sum(&self) -> Result<i64, MasterServiceError>;

    /// All three statistics in one call.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any of the individual statistics.
    fn stats(&self) -> Result<Stats, MasterServiceError>;
}
