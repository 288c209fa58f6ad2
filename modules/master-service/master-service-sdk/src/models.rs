//! Public models for the master-service module.

/// The three statistics, computed together by `MasterServiceApi::stats`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub average: f64,
    pub max_square: i64,
    pub double_sum: i64,
}
