//! Error types for bed synchronization

use bed_ledger::WardKey;
use std::fmt;
use thiserror::Error;

/// Operator action a sync failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Load,
    Save,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStage::Load => f.write_str("load"),
            SyncStage::Save => f.write_str("save"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Bed {stage} failed with status: {status}")]
    Status { stage: SyncStage, status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Backend rejected bed {stage}: {message}")]
    Rejected { stage: SyncStage, message: String },

    #[error("Save stopped at {ward} after {completed} of {total} wards: {source}")]
    SaveAborted {
        ward: WardKey,
        completed: usize,
        total: usize,
        source: Box<SyncError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// Whether repeating the same operator action may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::Config(_) => false,
            SyncError::SaveAborted { source, .. } => source.is_retryable(),
            _ => true,
        }
    }

    pub fn stage(&self) -> Option<SyncStage> {
        match self {
            SyncError::Status { stage, .. } | SyncError::Rejected { stage, .. } => Some(*stage),
            SyncError::SaveAborted { .. } => Some(SyncStage::Save),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Deserialization(err.to_string())
        } else {
            SyncError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Deserialization(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
