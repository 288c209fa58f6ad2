//! Master Service Module
//!
//! Computes simple statistics (average, maximum squared, doubled sum) over a
//! dataset owned by an injected data collaborator.
//!
//! ## Public API
//!
//! The public API is defined in the `master-service-sdk` crate and re-exported here:
//! - `MasterServiceApi` - trait for consumers
//! - `Stats` - combined result model
//! - `MasterServiceError` - error types
//!
//! ## Architecture
//!
//! - `domain/ports.rs` - collaborator traits (`DataSource`, `DataStore`, `Doubler`)
//! - `domain/service.rs` - core computation
//! - `infra/` - in-memory dataset and doubling helper
//! - `module.rs` - wiring from configuration
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use master_service_sdk::{MasterServiceApi, MasterServiceError, Stats};

// === MODULE DEFINITION ===
pub mod module;
pub use module::MasterServiceModule;

// === LOCAL CLIENT ===
// Local client adapter that implements MasterServiceApi
pub mod local_client;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;
