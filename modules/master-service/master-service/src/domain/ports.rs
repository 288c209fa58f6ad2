//! Output ports (interfaces) for the master service.

use super::error::DomainError;

/// Read side of the dataset, as consumed by `MasterService`.
pub trait DataSource: Send + Sync {
    /// Returns the current items in insertion order.
    ///
    /// `None` means the source has no sequence at all, as opposed to an
    /// empty one.
    fn get_all_data(&self) -> Option<Vec<i64>>;

    /// Returns the largest stored item, or `None` when nothing is stored.
    fn get_max(&self) -> Option<i64>;
}

/// Mutable dataset with a fixed capacity.
pub trait DataStore: DataSource {
    /// Appends an item.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the dataset is already full.
    fn add_item(&self, value: i64) -> Result<(), DomainError>;

    /// Removes every item.
    fn clear_all(&self);
}

/// Arithmetic helper that doubles a value.
pub trait Doubler: Send + Sync {
    /// Returns `2 * value`, or `None` if that does not fit in an `i64`.
    fn double(&self, value: i64) -> Option<i64>;
}
