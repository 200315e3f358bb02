/// Bed Sync Controller
///
/// Owns the ledger for one operator session and reconciles it with the
/// bed-management backend:
///
/// - `load`: fetch ward rows -> normalize -> replace the ledger
/// - `save`: one upsert per catalog ward, in catalog order -> reload
///
/// Both actions take `&mut self`, so a second load or save cannot start
/// while one is in flight on the same controller.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult, SyncStage};
use crate::transport::{HttpWardStore, WardStore};
use bed_ledger::{
    normalize, to_upsert, BedField, Ledger, UnmappedRecord, ValidationResult, WardKey, WardRecord,
    WARD_COUNT,
};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Backend rows placed in the ledger
    pub applied: usize,
    /// Rows that matched no catalog ward, in response order
    pub skipped: Vec<UnmappedRecord>,
}

/// Outcome of a successful save and its follow-up reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub upserted: usize,
    pub reload: LoadReport,
}

pub struct BedSyncController<S: WardStore> {
    store: S,
    hospital_id: i64,
    ledger: Ledger,
}

impl BedSyncController<HttpWardStore> {
    /// Controller over the HTTP backend described by `config`.
    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        let store = HttpWardStore::new(config)?;
        Ok(Self::new(store, config.hospital_id))
    }
}

impl<S: WardStore> BedSyncController<S> {
    /// Starts with an all-zero ledger until the first load.
    pub fn new(store: S, hospital_id: i64) -> Self {
        Self {
            store,
            hospital_id,
            ledger: Ledger::zeroed(),
        }
    }

    pub fn hospital_id(&self) -> i64 {
        self.hospital_id
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn set(&mut self, key: WardKey, field: BedField, raw: &str) -> ValidationResult<()> {
        self.ledger.set(key, field, raw)
    }

    /// Local only; nothing is sent until the next save.
    pub fn reset_to_defaults(&mut self) {
        self.ledger.reset_to_defaults();
    }

    /// Replace the ledger with the backend's current ward rows.
    ///
    /// Wards the backend has no row for read as `0/0/0`. On any error the
    /// current ledger is left as it was.
    #[instrument(skip(self), fields(hospital_id = self.hospital_id))]
    pub async fn load(&mut self) -> SyncResult<LoadReport> {
        let response = self.store.fetch_wards(self.hospital_id).await?;
        if !response.success {
            return Err(SyncError::Rejected {
                stage: SyncStage::Load,
                message: "ward list request was not successful".to_string(),
            });
        }

        let (ledger, report) = build_ledger(response.wards);
        self.ledger = ledger;

        info!(
            applied = report.applied,
            skipped = report.skipped.len(),
            "bed ledger loaded"
        );
        Ok(report)
    }

    /// Persist every ward, then reload.
    ///
    /// Upserts run one at a time and stop at the first failure. The reload
    /// runs regardless so the ledger reflects whatever the backend now
    /// holds. A save error takes precedence over a reload error.
    #[instrument(skip(self), fields(hospital_id = self.hospital_id))]
    pub async fn save(&mut self) -> SyncResult<SaveReport> {
        let flushed = self.flush().await;
        let reloaded = self.load().await;

        match (flushed, reloaded) {
            (Ok(upserted), Ok(reload)) => {
                info!(upserted, "bed ledger saved");
                Ok(SaveReport { upserted, reload })
            }
            (Ok(_), Err(reload_err)) => Err(reload_err),
            (Err(save_err), Ok(_)) => Err(save_err),
            (Err(save_err), Err(reload_err)) => {
                warn!(error = %reload_err, "reload after failed save also failed");
                Err(save_err)
            }
        }
    }

    async fn flush(&self) -> SyncResult<usize> {
        for (completed, key) in WardKey::ALL.into_iter().enumerate() {
            let payload = to_upsert(self.hospital_id, key, self.ledger.coerced(key));
            debug!(
                ward = %key,
                total = payload.total_beds,
                available = payload.available_beds,
                reserved = payload.reserved_beds,
                occupied = payload.occupied_beds,
                "upserting ward"
            );

            if let Err(source) = self.store.upsert_ward(&payload).await {
                warn!(ward = %key, completed, error = %source, "ward upsert failed");
                return Err(SyncError::SaveAborted {
                    ward: key,
                    completed,
                    total: WARD_COUNT,
                    source: Box::new(source),
                });
            }
        }
        Ok(WARD_COUNT)
    }
}

/// Fresh all-zero ledger filled from raw backend rows. A later row for the
/// same ward replaces an earlier one.
fn build_ledger(rows: Vec<serde_json::Value>) -> (Ledger, LoadReport) {
    let mut ledger = Ledger::zeroed();
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for row in rows {
        let mapped = serde_json::from_value::<WardRecord>(row)
            .map_err(|e| UnmappedRecord::Malformed {
                reason: e.to_string(),
            })
            .and_then(|record| normalize(&record));

        match mapped {
            Ok((key, count)) => {
                if !seen.insert(key) {
                    debug!(ward = %key, "duplicate ward row, keeping the later one");
                }
                ledger.replace(key, count);
                report.applied += 1;
            }
            Err(unmapped) => {
                warn!(reason = %unmapped, "skipping backend ward row");
                report.skipped.push(unmapped);
            }
        }
    }

    (ledger, report)
}
