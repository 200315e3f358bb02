//! Error and warning types for the bed ledger

use crate::ledger::BedField;
use thiserror::Error;

/// Rejected ledger edit. The message is shown to the operator inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} beds must be a whole number, got {raw:?}")]
    NotANumber { field: BedField, raw: String },

    #[error("{field} beds cannot be negative (got {value})")]
    Negative { field: BedField, value: i64 },

    #[error("{field} beds value {raw} is out of range")]
    OutOfRange { field: BedField, raw: String },

    #[error("Cannot exceed maximum of {max} for {field} beds")]
    ExceedsMaximum { field: BedField, max: u32, value: u32 },
}

/// A backend ward record that could not be placed in the ledger.
///
/// These never fail a load: the record is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnmappedRecord {
    #[error("no catalog ward for ward_type={ward_type:?}, ac_type={ac_type:?}")]
    UnknownWard { ward_type: String, ac_type: String },

    #[error("no catalog private room for room_config={room_config:?}")]
    UnknownRoomConfig { room_config: Option<String> },

    #[error("invalid bed counts for ward_type={ward_type:?}: {reason}")]
    InvalidCounts { ward_type: String, reason: String },

    #[error("malformed ward record: {reason}")]
    Malformed { reason: String },
}

/// A string that names no catalog entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct CatalogParseError {
    pub kind: &'static str,
    pub value: String,
}

impl CatalogParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
