//! Module wiring for master-service.

use std::sync::Arc;

use master_service_sdk::MasterServiceApi;
use tracing::info;

use crate::config::MasterServiceConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::{DataSource, DataStore, Doubler};
use crate::domain::service::MasterService;
use crate::infra::{AlgoService, InMemoryDataService};
use crate::local_client::MasterServiceLocalClient;

/// Master-service module: the in-memory dataset, the service over it, and
/// the SDK client in front of the service.
pub struct MasterServiceModule {
    data: Arc<InMemoryDataService>,
    service: Arc<MasterService>,
    client: Arc<MasterServiceLocalClient>,
}

impl MasterServiceModule {
    /// Builds the module and loads `config.seed` into the dataset.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the seed holds more values than
    /// `config.capacity`.
    pub fn from_config(config: &MasterServiceConfig) -> Result<Self, DomainError> {
        info!(
            capacity = config.capacity,
            seed_len = config.seed.len(),
            "initializing master service module"
        );

        let data = Arc::new(InMemoryDataService::new(config.capacity));
        for &value in &config.seed {
            data.add_item(value)?;
        }

        let algo: Arc<dyn Doubler> = Arc::new(AlgoService);
        let source: Arc<dyn DataSource> = Arc::clone(&data) as Arc<dyn DataSource>;
        let service = Arc::new(MasterService::new(algo, source));
        let client = Arc::new(MasterServiceLocalClient::new(Arc::clone(&service)));

        Ok(Self {
            data,
            service,
            client,
        })
    }

    /// The dataset the service reads from.
    #[must_use]
    pub fn data_store(&self) -> Arc<InMemoryDataService> {
        Arc::clone(&self.data)
    }

    #[must_use]
    pub fn service(&self) -> Arc<MasterService> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn MasterServiceApi> {
        Arc::clone(&self.client) as Arc<dyn MasterServiceApi>
    }
}
