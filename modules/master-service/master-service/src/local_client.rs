use std::sync::Arc;

use master_service_sdk::{MasterServiceApi, MasterServiceError, Stats};

use crate::domain::service::MasterService;

/// Local implementation of `MasterServiceApi`.
///
/// Acts as the SDK boundary adapter: converts `DomainError` into `MasterServiceError`.
#[derive(Clone)]
pub struct MasterServiceLocalClient {
    service: Arc<MasterService>,
}

impl MasterServiceLocalClient {
    #[must_use]
    pub fn new(service: Arc<MasterService>) -> Self {
        Self { service }
    }
}

impl MasterServiceApi for MasterServiceLocalClient {
    fn average(&self) -> Result<f64, MasterServiceError> {
        self.service.get_average().map_err(MasterServiceError::from)
    }

    fn max_square(&self) -> Result<i64, MasterServiceError> {
        self.service
            .get_max_square()
            .map_err(MasterServiceError::from)
    }

    fn double_sum(&self) -> Result<i64, MasterServiceError> {
        self.service
            .get_double_sum()
            .map_err(MasterServiceError::from)
    }

    fn stats(&self) -> Result<Stats, MasterServiceError> {
        self.service.get_stats().map_err(MasterServiceError::from)
    }
}
