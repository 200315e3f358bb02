//! Bed inventory model for RustCare hospital bed management
//!
//! Provides:
//! - The closed ward catalog and its key <-> classification mapping
//! - Normalization of backend ward records onto ledger keys
//! - The bed ledger with edit validation and derived occupancy
//! - Capacity statistics for the dashboard (readiness, occupancy bands)
//!
//! # Example
//!
//! ```rust
//! use bed_ledger::{BedField, Ledger, Readiness, WardKey};
//!
//! let mut ledger = Ledger::zeroed();
//! ledger.set(WardKey::Icu, BedField::Total, "10")?;
//! ledger.set(WardKey::Icu, BedField::Available, "4")?;
//! ledger.set(WardKey::Icu, BedField::Reserved, "2")?;
//!
//! assert_eq!(ledger.occupied(WardKey::Icu), 4);
//! assert!(ledger.set(WardKey::Icu, BedField::Available, "15").is_err());
//! assert_eq!(ledger.aggregate().readiness(), Readiness::Medium);
//! # Ok::<(), bed_ledger::ValidationError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod normalizer;
pub mod stats;

pub use catalog::{
    classify, key_for, AcType, RoomConfig, WardClassification, WardKey, WardType, CATALOG,
    WARD_COUNT,
};
pub use error::{CatalogParseError, UnmappedRecord, ValidationError, ValidationResult};
pub use ledger::{BackendId, BedCount, BedField, Ledger, SettledCount};
pub use normalizer::{normalize, resolve_room_config, to_upsert, WardRecord, WardUpsert};
pub use stats::{
    occupancy_percent, AvailabilityBadge, CapacitySummary, OccupancyLevel, Readiness,
    WardSnapshot,
};
