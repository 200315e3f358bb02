/// Bed Ledger
///
/// In-memory bed counts for every catalog ward. Occupancy is never stored:
/// it is derived from `total - available - reserved` on each read.
///
/// Invariants maintained by [`Ledger::set`]:
/// - `available <= total - reserved`
/// - `reserved <= total - available`
///
/// Lowering `total` is allowed even if it breaks the invariants above; the
/// values are clamped when the ledger is flushed (see [`Ledger::coerced`]).

use crate::catalog::{WardKey, WARD_COUNT};
use crate::error::{ValidationError, ValidationResult};
use crate::stats::{occupancy_percent, CapacitySummary, WardSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Opaque backend identifier of a persisted ward row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendId::Number(n) => write!(f, "{}", n),
            BackendId::Text(s) => f.write_str(s),
        }
    }
}

/// Editable count fields of a ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedField {
    Total,
    Available,
    Reserved,
}

impl BedField {
    pub const ALL: [BedField; 3] = [BedField::Total, BedField::Available, BedField::Reserved];

    pub fn as_str(self) -> &'static str {
        match self {
            BedField::Total => "total",
            BedField::Available => "available",
            BedField::Reserved => "reserved",
        }
    }
}

impl fmt::Display for BedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts for one ward. `None` is the empty-input sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedCount {
    pub total: Option<u32>,
    pub available: Option<u32>,
    pub reserved: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BackendId>,
}

impl BedCount {
    pub fn new(total: u32, available: u32, reserved: u32) -> Self {
        Self {
            total: Some(total),
            available: Some(available),
            reserved: Some(reserved),
            id: None,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn with_id(mut self, id: BackendId) -> Self {
        self.id = Some(id);
        self
    }

    /// Raw field value, `None` while the input is cleared.
    pub fn field(&self, field: BedField) -> Option<u32> {
        match field {
            BedField::Total => self.total,
            BedField::Available => self.available,
            BedField::Reserved => self.reserved,
        }
    }

    /// Field value with the empty sentinel read as zero.
    pub fn value(&self, field: BedField) -> u32 {
        self.field(field).unwrap_or(0)
    }

    fn set_field(&mut self, field: BedField, value: Option<u32>) {
        match field {
            BedField::Total => self.total = value,
            BedField::Available => self.available = value,
            BedField::Reserved => self.reserved = value,
        }
    }

    pub fn has_blank(&self) -> bool {
        BedField::ALL.into_iter().any(|f| self.field(f).is_none())
    }

    /// `total - available - reserved`. Negative only if `total` was lowered
    /// below the other two since they were entered.
    pub fn occupied(&self) -> i64 {
        i64::from(self.value(BedField::Total))
            - i64::from(self.value(BedField::Available))
            - i64::from(self.value(BedField::Reserved))
    }

    /// Upper bound the ledger currently accepts for `field`.
    pub fn max_for(&self, field: BedField) -> Option<u32> {
        let total = self.value(BedField::Total);
        match field {
            BedField::Total => None,
            BedField::Available => Some(total.saturating_sub(self.value(BedField::Reserved))),
            BedField::Reserved => Some(total.saturating_sub(self.value(BedField::Available))),
        }
    }

    pub fn settle(&self) -> SettledCount {
        let total = self.value(BedField::Total);
        let available = self.value(BedField::Available).min(total);
        let reserved = self.value(BedField::Reserved).min(total - available);
        SettledCount {
            total,
            available,
            reserved,
        }
    }
}

impl Default for BedCount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Persistable counts: no blanks, invariants hold, occupancy non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledCount {
    total: u32,
    available: u32,
    reserved: u32,
}

impl SettledCount {
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    pub fn occupied(&self) -> u32 {
        self.total
            .saturating_sub(self.available)
            .saturating_sub(self.reserved)
    }
}

/// Built-in counts used by the "reset to default" operator action.
fn default_count(key: WardKey) -> BedCount {
    match key {
        WardKey::GeneralAc => BedCount::new(50, 10, 5),
        WardKey::GeneralNonAc => BedCount::new(40, 8, 3),
        WardKey::MaternityAc => BedCount::new(30, 6, 2),
        WardKey::MaternityNonAc => BedCount::new(25, 5, 2),
        WardKey::PediatricsAc => BedCount::new(20, 4, 2),
        WardKey::PediatricsNonAc => BedCount::new(15, 3, 1),
        WardKey::Icu => BedCount::new(10, 2, 1),
        WardKey::Emergency => BedCount::new(15, 5, 0),
        WardKey::Private1BedNoBath => BedCount::new(10, 3, 1),
        WardKey::Private1BedWithBath => BedCount::new(8, 2, 1),
        WardKey::Private2BedWithBath => BedCount::new(5, 1, 1),
    }
}

fn parse_count(field: BedField, raw: &str) -> ValidationResult<u32> {
    let parsed: i64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        raw: raw.to_string(),
    })?;
    if parsed < 0 {
        return Err(ValidationError::Negative {
            field,
            value: parsed,
        });
    }
    u32::try_from(parsed).map_err(|_| ValidationError::OutOfRange {
        field,
        raw: raw.to_string(),
    })
}

/// Bed counts for every ward in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    counts: [BedCount; WARD_COUNT],
}

impl Ledger {
    /// Every ward at `0/0/0`.
    pub fn zeroed() -> Self {
        Self {
            counts: std::array::from_fn(|_| BedCount::zero()),
        }
    }

    /// Fresh ledger filled with the built-in default counts.
    pub fn defaults() -> Self {
        Self {
            counts: WardKey::ALL.map(default_count),
        }
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::defaults();
    }

    #[allow(clippy::indexing_slicing)] // WardKey discriminants are dense over 0..WARD_COUNT
    pub fn get(&self, key: WardKey) -> &BedCount {
        &self.counts[key.index()]
    }

    #[allow(clippy::indexing_slicing)]
    fn slot_mut(&mut self, key: WardKey) -> &mut BedCount {
        &mut self.counts[key.index()]
    }

    /// Replace a ward's counts wholesale, bypassing edit validation.
    pub fn replace(&mut self, key: WardKey, count: BedCount) {
        *self.slot_mut(key) = count;
    }

    /// Apply one operator edit.
    ///
    /// Blank input stores the empty sentinel. Anything else must parse as a
    /// non-negative integer within [`Ledger::max_for`]; on error nothing is
    /// changed.
    pub fn set(&mut self, key: WardKey, field: BedField, raw: &str) -> ValidationResult<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.slot_mut(key).set_field(field, None);
            debug!(ward = %key, %field, "bed count cleared");
            return Ok(());
        }

        let value = parse_count(field, raw)?;
        if let Some(max) = self.max_for(key, field) {
            if value > max {
                return Err(ValidationError::ExceedsMaximum { field, max, value });
            }
        }

        self.slot_mut(key).set_field(field, Some(value));
        debug!(ward = %key, %field, value, "bed count updated");
        Ok(())
    }

    pub fn max_for(&self, key: WardKey, field: BedField) -> Option<u32> {
        self.get(key).max_for(field)
    }

    pub fn occupied(&self, key: WardKey) -> i64 {
        self.get(key).occupied()
    }

    pub fn occupancy_percent(&self, key: WardKey) -> f64 {
        occupancy_percent(self.get(key))
    }

    /// Counts as they will be persisted.
    pub fn coerced(&self, key: WardKey) -> SettledCount {
        self.get(key).settle()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WardKey, &BedCount)> + '_ {
        WardKey::ALL.into_iter().zip(self.counts.iter())
    }

    pub fn aggregate(&self) -> CapacitySummary {
        self.iter().fold(CapacitySummary::default(), |acc, (_, count)| CapacitySummary {
            total_available: acc.total_available + u64::from(count.value(BedField::Available)),
            total_capacity: acc.total_capacity + u64::from(count.value(BedField::Total)),
        })
    }

    pub fn snapshot(&self, key: WardKey) -> WardSnapshot {
        WardSnapshot::new(key, self.get(key))
    }

    pub fn snapshots(&self) -> Vec<WardSnapshot> {
        WardKey::ALL.into_iter().map(|k| self.snapshot(k)).collect()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::zeroed()
    }
}
