//! Test doubles for the collaborator ports.
//!
//! Both doubles count how often they are called so tests can assert on the
//! interaction with `MasterService` as well as on its results.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::domain::ports::{DataSource, Doubler};
use crate::infra::AlgoService;

/// Canned `DataSource` that counts calls to each method.
pub struct CountingDataSource {
    data: Option<Vec<i64>>,
    max: Option<i64>,
    all_data_calls: AtomicUsize,
    max_calls: AtomicUsize,
}

impl CountingDataSource {
    /// Source that yields `data`, with its maximum derived from it.
    #[must_use]
    pub fn returning(data: Vec<i64>) -> Self {
        let max = data.iter().copied().max();
        Self {
            data: Some(data),
            max,
            all_data_calls: AtomicUsize::new(0),
            max_calls: AtomicUsize::new(0),
        }
    }

    /// Source that yields no sequence at all.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            data: None,
            max: None,
            all_data_calls: AtomicUsize::new(0),
            max_calls: AtomicUsize::new(0),
        }
    }

    /// Overrides the value returned by `get_max`.
    #[must_use]
    pub fn with_max(mut self, max: Option<i64>) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn all_data_calls(&self) -> usize {
        self.all_data_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn max_calls(&self) -> usize {
        self.max_calls.load(Ordering::SeqCst)
    }
}

impl DataSource for CountingDataSource {
    fn get_all_data(&self) -> Option<Vec<i64>> {
        self.all_data_calls.fetch_add(1, Ordering::SeqCst);
        self.data.clone()
    }

    fn get_max(&self) -> Option<i64> {
        self.max_calls.fetch_add(1, Ordering::SeqCst);
        self.max
    }
}

/// `Doubler` that delegates to `AlgoService` and records every input.
#[derive(Default)]
pub struct RecordingDoubler {
    inputs: Mutex<Vec<i64>>,
}

impl RecordingDoubler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs passed to `double`, oldest first.
    #[must_use]
    pub fn inputs(&self) -> Vec<i64> {
        self.inputs.lock().clone()
    }
}

impl Doubler for RecordingDoubler {
    fn double(&self, value: i64) -> Option<i64> {
        self.inputs.lock().push(value);
        AlgoService.double(value)
    }
}
