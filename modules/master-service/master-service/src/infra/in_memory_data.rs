//! In-memory dataset with a fixed capacity.

use parking_lot::RwLock;

use crate::domain::error::DomainError;
use crate::domain::ports::{DataSource, DataStore};

/// Ordered, bounded list of integers kept in process memory.
///
/// The `RwLock` satisfies the `Send + Sync` port bounds. Concurrent
/// mutation is not a supported use.
pub struct InMemoryDataService {
    items: RwLock<Vec<i64>>,
    capacity: usize,
}

impl InMemoryDataService {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl DataSource for InMemoryDataService {
    fn get_all_data(&self) -> Option<Vec<i64>> {
        Some(self.items.read().clone())
    }

    fn get_max(&self) -> Option<i64> {
        self.items.read().iter().copied().max()
    }
}

impl DataStore for InMemoryDataService {
    fn add_item(&self, value: i64) -> Result<(), DomainError> {
        let mut items = self.items.write();
        if items.len() >= self.capacity {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        items.push(value);
        Ok(())
    }

    fn clear_all(&self) {
        self.items.write().clear();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let store = InMemoryDataService::new(10);
        for value in [3, 1, 2] {
            store.add_item(value).unwrap();
        }
        assert_eq!(store.get_all_data(), Some(vec![3, 1, 2]));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store_returns_empty_sequence_and_no_max() {
        let store = InMemoryDataService::new(10);
        assert!(store.is_empty());
        assert_eq!(store.get_all_data(), Some(Vec::new()));
        assert_eq!(store.get_max(), None);
    }

    #[test]
    fn test_get_max() {
        let store = InMemoryDataService::new(10);
        for value in [-4, 9, 0, 7] {
            store.add_item(value).unwrap();
        }
        assert_eq!(store.get_max(), Some(9));
    }

    #[test]
    fn test_add_past_capacity_fails() {
        let store = InMemoryDataService::new(2);
        store.add_item(1).unwrap();
        store.add_item(2).unwrap();

        let err = store.add_item(3).unwrap_err();

        assert_eq!(err, DomainError::CapacityExceeded { capacity: 2 });
        assert_eq!(store.get_all_data(), Some(vec![1, 2]));
    }

    #[test]
    fn test_clear_all_frees_capacity() {
        let store = InMemoryDataService::new(1);
        store.add_item(5).unwrap();

        store.clear_all();

        assert!(store.is_empty());
        assert_eq!(store.capacity(), 1);
        store.add_item(6).unwrap();
        assert_eq!(store.get_all_data(), Some(vec![6]));
    }
}
