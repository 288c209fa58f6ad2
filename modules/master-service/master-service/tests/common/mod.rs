#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for master-service integration tests

use std::sync::Arc;

use master_service::domain::ports::DataStore;
use master_service::domain::service::MasterService;
use master_service::infra::{AlgoService, InMemoryDataService};

pub const CAPACITY: usize = 10;

/// Dataset seeded with 1..=9 for the duration of a test.
///
/// Dropping the fixture clears the dataset again.
pub struct SeededFixture {
    pub store: Arc<InMemoryDataService>,
}

impl SeededFixture {
    pub fn seeded() -> Self {
        let store = Arc::new(InMemoryDataService::new(CAPACITY));
        for value in 1..=9 {
            store.add_item(value).expect("seed fits in capacity");
        }
        Self { store }
    }

    pub fn service(&self) -> MasterService {
        MasterService::new(Arc::new(AlgoService), Arc::clone(&self.store) as _)
    }
}

impl Drop for SeededFixture {
    fn drop(&mut self) {
        self.store.clear_all();
    }
}
