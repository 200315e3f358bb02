//! Configuration for bed synchronization

use crate::error::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ENV_SERVER_URL: &str = "BED_SYNC_SERVER_URL";
pub const ENV_HOSPITAL_ID: &str = "BED_SYNC_HOSPITAL_ID";
pub const ENV_AUTH_TOKEN: &str = "BED_SYNC_AUTH_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "BED_SYNC_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// API base URL; endpoints are appended to it
    pub server_url: String,
    /// Hospital whose wards are loaded and saved
    pub hospital_id: i64,
    /// Bearer token for the bed-management API
    #[serde(skip_serializing)] // Never serialize tokens
    pub auth_token: Option<String>,
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080/api/v1".to_string(),
            hospital_id: 1,
            auth_token: None,
            timeout_secs: 30,
        }
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("server_url", &self.server_url)
            .field("hospital_id", &self.hospital_id)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SyncConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// when one is present.
    pub fn load() -> SyncResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_url = lookup(ENV_SERVER_URL)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.server_url);

        let hospital_id = match lookup(ENV_HOSPITAL_ID) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                SyncError::Config(format!("{} must be an integer, got {:?}", ENV_HOSPITAL_ID, raw))
            })?,
            None => defaults.hospital_id,
        };

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                SyncError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?,
            None => defaults.timeout_secs,
        };

        let auth_token = lookup(ENV_AUTH_TOKEN).filter(|s| !s.is_empty());

        Ok(Self {
            server_url,
            hospital_id,
            auth_token,
            timeout_secs,
        })
    }
}
