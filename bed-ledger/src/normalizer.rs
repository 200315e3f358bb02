/// Key Normalizer
///
/// Translates between backend ward rows, classified by
/// `(ward_type, ac_type, room_config)`, and flat ledger keys.
///
/// The backend has historically spelled private room configurations two
/// ways (`1_bed_no_bath` and `1bed_no_bath`). Both spellings are registered
/// in [`ROOM_CONFIG_ALIASES`]; anything else is reported as unmapped.

use crate::catalog::{key_for, AcType, RoomConfig, WardClassification, WardKey, WardType};
use crate::error::UnmappedRecord;
use crate::ledger::{BackendId, BedCount, SettledCount};
use serde::{Deserialize, Serialize};

/// Accepted backend spellings for each private room configuration.
pub const ROOM_CONFIG_ALIASES: [(&str, RoomConfig); 6] = [
    ("1_bed_no_bath", RoomConfig::OneBedNoBath),
    ("1bed_no_bath", RoomConfig::OneBedNoBath),
    ("1_bed_with_bath", RoomConfig::OneBedWithBath),
    ("1bed_with_bath", RoomConfig::OneBedWithBath),
    ("2_bed_with_bath", RoomConfig::TwoBedWithBath),
    ("2bed_with_bath", RoomConfig::TwoBedWithBath),
];

pub fn resolve_room_config(raw: &str) -> Option<RoomConfig> {
    ROOM_CONFIG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, config)| *config)
}

/// Ward row as returned by `GET /bed-management/bed-wards`.
///
/// Classification fields stay as strings so unknown values surface as
/// [`UnmappedRecord`] warnings rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardRecord {
    #[serde(default)]
    pub id: Option<BackendId>,
    pub ward_type: String,
    pub ac_type: String,
    #[serde(default)]
    pub room_config: Option<String>,
    pub total_beds: i64,
    pub available_beds: i64,
    pub reserved_beds: i64,
}

/// Body of `POST /bed-management/bed-wards` (upsert by classification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardUpsert {
    pub hospital_id: i64,
    pub ward_type: WardType,
    pub ac_type: AcType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_config: Option<RoomConfig>,
    pub total_beds: u32,
    pub available_beds: u32,
    pub reserved_beds: u32,
    pub occupied_beds: u32,
}

fn classification_of(record: &WardRecord) -> Result<WardClassification, UnmappedRecord> {
    let unknown_ward = || UnmappedRecord::UnknownWard {
        ward_type: record.ward_type.clone(),
        ac_type: record.ac_type.clone(),
    };

    let ward_type: WardType = record.ward_type.parse().map_err(|_| unknown_ward())?;
    if ward_type == WardType::PrivateRoom {
        let room_config = record
            .room_config
            .as_deref()
            .and_then(resolve_room_config)
            .ok_or_else(|| UnmappedRecord::UnknownRoomConfig {
                room_config: record.room_config.clone(),
            })?;
        return Ok(WardClassification::private_room(room_config));
    }

    let ac_type: AcType = record.ac_type.parse().map_err(|_| unknown_ward())?;
    Ok(WardClassification::ward(ward_type, ac_type))
}

fn count_field(record: &WardRecord, name: &str, value: i64) -> Result<u32, UnmappedRecord> {
    u32::try_from(value).map_err(|_| UnmappedRecord::InvalidCounts {
        ward_type: record.ward_type.clone(),
        reason: format!("{} = {}", name, value),
    })
}

/// Map one backend row onto its ledger slot.
pub fn normalize(record: &WardRecord) -> Result<(WardKey, BedCount), UnmappedRecord> {
    let classification = classification_of(record)?;
    let key = key_for(&classification).ok_or_else(|| UnmappedRecord::UnknownWard {
        ward_type: record.ward_type.clone(),
        ac_type: record.ac_type.clone(),
    })?;

    let count = BedCount {
        total: Some(count_field(record, "total_beds", record.total_beds)?),
        available: Some(count_field(record, "available_beds", record.available_beds)?),
        reserved: Some(count_field(record, "reserved_beds", record.reserved_beds)?),
        id: record.id.clone(),
    };

    Ok((key, count))
}

/// Build the upsert body for one ward from its settled counts.
pub fn to_upsert(hospital_id: i64, key: WardKey, counts: SettledCount) -> WardUpsert {
    let classification = key.classification();
    WardUpsert {
        hospital_id,
        ward_type: classification.ward_type,
        ac_type: classification.ac_type,
        room_config: classification.room_config,
        total_beds: counts.total(),
        available_beds: counts.available(),
        reserved_beds: counts.reserved(),
        occupied_beds: counts.occupied(),
    }
}
