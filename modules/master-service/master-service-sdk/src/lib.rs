//! Master Service SDK
//!
//! This crate provides the public contract of the master-service module:
//! - API trait (`MasterServiceApi`)
//! - Models (`Stats`)
//! - Error types (`MasterServiceError`)
//!
//! ## Usage
//!
//! ```ignore
//! use master_service_sdk::MasterServiceApi;
//!
//! let client: Arc<dyn MasterServiceApi> = module.client();
//! let average = client.average()?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::MasterServiceApi;
pub use errors::MasterServiceError;
pub use models::Stats;
