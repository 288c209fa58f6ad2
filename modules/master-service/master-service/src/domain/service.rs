//! Domain service for the master-service module.

use std::sync::Arc;

use master_service_sdk::Stats;
use tracing::{debug, instrument, warn};

use super::error::DomainError;
use super::ports::{DataSource, Doubler};

/// Stateless facade over the injected collaborators.
///
/// Every operation reads the data source anew, so results always reflect the
/// dataset at call time. An absent or empty dataset is rejected the same way
/// by all operations.
pub struct MasterService {
    algo: Arc<dyn Doubler>,
    data: Arc<dyn DataSource>,
}

impl MasterService {
    /// Creates a new `MasterService` over the given collaborators.
    #[must_use]
    pub fn new(algo: Arc<dyn Doubler>, data: Arc<dyn DataSource>) -> Self {
        Self { algo, data }
    }

    /// Arithmetic mean of the dataset.
    ///
    /// # Errors
    ///
    /// Returns `NullData` or `EmptyData` if there is nothing to average, and
    /// `Overflow` if the sum does not fit in an `i64`.
    #[instrument(skip(self))]
    pub fn get_average(&self) -> Result<f64, DomainError> {
        let data = self.load_data()?;
        let sum = checked_sum(&data)?;

        #[allow(clippy::cast_precision_loss)]
        let average = sum as f64 / data.len() as f64;

        debug!(average, count = data.len(), "computed average");
        Ok(average)
    }

    /// Square of the dataset maximum.
    ///
    /// Queries `DataSource::get_max` exactly once and never reads the full
    /// dataset.
    ///
    /// # Errors
    ///
    /// Returns `EmptyData` if the source has no maximum, and `Overflow` if
    /// the square does not fit in an `i64`.
    #[instrument(skip(self))]
    pub fn get_max_square(&self) -> Result<i64, DomainError> {
        let Some(max) = self.data.get_max() else {
            warn!("data source has no maximum");
            return Err(DomainError::EmptyData);
        };

        let square = max
            .checked_mul(max)
            .ok_or_else(|| DomainError::overflow("max square"))?;

        debug!(max, square, "computed max square");
        Ok(square)
    }

    /// Sum of the dataset, doubled by the `Doubler` collaborator.
    ///
    /// Queries `DataSource::get_all_data` exactly once.
    ///
    /// # Errors
    ///
    /// Returns `NullData` if the source yields no sequence, `EmptyData` if the
    /// sequence is empty, and `Overflow` if the sum or its double does not fit
    /// in an `i64`.
    #[instrument(skip(self))]
    pub fn get_double_sum(&self) -> Result<i64, DomainError> {
        let data = self.load_data()?;
        let sum = checked_sum(&data)?;

        let doubled = self
            .algo
            .double(sum)
            .ok_or_else(|| DomainError::overflow("double sum"))?;

        debug!(sum, doubled, "computed double sum");
        Ok(doubled)
    }

    /// All three statistics, each computed by its own operation.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `get_average`, `get_max_square` or
    /// `get_double_sum`, in that order.
    pub fn get_stats(&self) -> Result<Stats, DomainError> {
        Ok(Stats {
            average: self.get_average()?,
            max_square: self.get_max_square()?,
            double_sum: self.get_double_sum()?,
        })
    }

    fn load_data(&self) -> Result<Vec<i64>, DomainError> {
        let Some(data) = self.data.get_all_data() else {
            warn!("data source returned no data");
            return Err(DomainError::NullData);
        };

        if data.is_empty() {
            warn!("data source is empty");
            return Err(DomainError::EmptyData);
        }

        Ok(data)
    }
}

fn checked_sum(values: &[i64]) -> Result<i64, DomainError> {
    values
        .iter()
        .try_fold(0_i64, |acc, &value| acc.checked_add(value))
        .ok_or_else(|| DomainError::overflow("sum"))
}
