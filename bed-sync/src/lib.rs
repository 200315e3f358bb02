//! Bed inventory synchronization for RustCare
//!
//! Provides:
//! - Environment-driven client configuration
//! - HTTP transport for the bed-management ward endpoints
//! - A sync controller that loads the ledger from the backend and saves
//!   it back one ward at a time

pub mod config;
pub mod controller;
pub mod error;
pub mod transport;

pub use config::SyncConfig;
pub use controller::{BedSyncController, LoadReport, SaveReport};
pub use error::{SyncError, SyncResult, SyncStage};
pub use transport::{HttpWardStore, WardListResponse, WardStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_from_default_config() {
        let controller = BedSyncController::from_config(&SyncConfig::default()).unwrap();
        assert_eq!(controller.hospital_id(), 1);
        assert_eq!(controller.ledger().aggregate().total_capacity, 0);
    }
}
