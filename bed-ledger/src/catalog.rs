/// Ward Catalog
///
/// The closed set of wards a hospital reports bed counts for. Each ward has
/// a flat UI-facing key (`general_ac`, `private_1bed_with_bath`, ...) and a
/// normalized backend classification `(ward_type, ac_type, room_config)`.
/// The table below is the only place that pairs the two; every lookup in
/// either direction goes through it.

use crate::error::CatalogParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CLASSIFICATION ENUMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WardType {
    General,
    Maternity,
    Pediatrics,
    Icu,
    Emergency,
    PrivateRoom,
}

impl WardType {
    pub const ALL: [WardType; 6] = [
        WardType::General,
        WardType::Maternity,
        WardType::Pediatrics,
        WardType::Icu,
        WardType::Emergency,
        WardType::PrivateRoom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WardType::General => "general",
            WardType::Maternity => "maternity",
            WardType::Pediatrics => "pediatrics",
            WardType::Icu => "icu",
            WardType::Emergency => "emergency",
            WardType::PrivateRoom => "private_room",
        }
    }
}

impl FromStr for WardType {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogParseError::new("ward type", s))
    }
}

impl fmt::Display for WardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcType {
    Ac,
    NonAc,
    NotApplicable,
}

impl AcType {
    pub const ALL: [AcType; 3] = [AcType::Ac, AcType::NonAc, AcType::NotApplicable];

    pub fn as_str(self) -> &'static str {
        match self {
            AcType::Ac => "ac",
            AcType::NonAc => "non_ac",
            AcType::NotApplicable => "not_applicable",
        }
    }
}

impl FromStr for AcType {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogParseError::new("ac type", s))
    }
}

impl fmt::Display for AcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Private room layout. Serialized in the canonical backend spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomConfig {
    #[serde(rename = "1_bed_no_bath")]
    OneBedNoBath,
    #[serde(rename = "1_bed_with_bath")]
    OneBedWithBath,
    #[serde(rename = "2_bed_with_bath")]
    TwoBedWithBath,
}

impl RoomConfig {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomConfig::OneBedNoBath => "1_bed_no_bath",
            RoomConfig::OneBedWithBath => "1_bed_with_bath",
            RoomConfig::TwoBedWithBath => "2_bed_with_bath",
        }
    }
}

impl fmt::Display for RoomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend classification of one ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WardClassification {
    pub ward_type: WardType,
    pub ac_type: AcType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_config: Option<RoomConfig>,
}

impl WardClassification {
    pub const fn ward(ward_type: WardType, ac_type: AcType) -> Self {
        Self {
            ward_type,
            ac_type,
            room_config: None,
        }
    }

    pub const fn private_room(room_config: RoomConfig) -> Self {
        Self {
            ward_type: WardType::PrivateRoom,
            ac_type: AcType::NotApplicable,
            room_config: Some(room_config),
        }
    }
}

// ============================================================================
// WARD KEYS
// ============================================================================

pub const WARD_COUNT: usize = 11;

/// Flat ledger key. Discriminants follow catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WardKey {
    GeneralAc,
    GeneralNonAc,
    MaternityAc,
    MaternityNonAc,
    PediatricsAc,
    PediatricsNonAc,
    Icu,
    Emergency,
    #[serde(rename = "private_1bed_no_bath")]
    Private1BedNoBath,
    #[serde(rename = "private_1bed_with_bath")]
    Private1BedWithBath,
    #[serde(rename = "private_2bed_with_bath")]
    Private2BedWithBath,
}

impl WardKey {
    pub const ALL: [WardKey; WARD_COUNT] = [
        WardKey::GeneralAc,
        WardKey::GeneralNonAc,
        WardKey::MaternityAc,
        WardKey::MaternityNonAc,
        WardKey::PediatricsAc,
        WardKey::PediatricsNonAc,
        WardKey::Icu,
        WardKey::Emergency,
        WardKey::Private1BedNoBath,
        WardKey::Private1BedWithBath,
        WardKey::Private2BedWithBath,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WardKey::GeneralAc => "general_ac",
            WardKey::GeneralNonAc => "general_non_ac",
            WardKey::MaternityAc => "maternity_ac",
            WardKey::MaternityNonAc => "maternity_non_ac",
            WardKey::PediatricsAc => "pediatrics_ac",
            WardKey::PediatricsNonAc => "pediatrics_non_ac",
            WardKey::Icu => "icu",
            WardKey::Emergency => "emergency",
            WardKey::Private1BedNoBath => "private_1bed_no_bath",
            WardKey::Private1BedWithBath => "private_1bed_with_bath",
            WardKey::Private2BedWithBath => "private_2bed_with_bath",
        }
    }

    /// Position in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn classification(self) -> WardClassification {
        classify(self)
    }

    pub fn label(self) -> &'static str {
        entry(self).label
    }
}

impl FromStr for WardKey {
    type Err = CatalogParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CatalogParseError::new("ward key", s))
    }
}

impl fmt::Display for WardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CATALOG TABLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WardEntry {
    pub key: WardKey,
    pub classification: WardClassification,
    pub label: &'static str,
}

const fn row(key: WardKey, classification: WardClassification, label: &'static str) -> WardEntry {
    WardEntry {
        key,
        classification,
        label,
    }
}

/// Rows are declared in `WardKey` discriminant order.
pub const CATALOG: [WardEntry; WARD_COUNT] = [
    row(
        WardKey::GeneralAc,
        WardClassification::ward(WardType::General, AcType::Ac),
        "General Ward (AC)",
    ),
    row(
        WardKey::GeneralNonAc,
        WardClassification::ward(WardType::General, AcType::NonAc),
        "General Ward (Non-AC)",
    ),
    row(
        WardKey::MaternityAc,
        WardClassification::ward(WardType::Maternity, AcType::Ac),
        "Maternity Ward (AC)",
    ),
    row(
        WardKey::MaternityNonAc,
        WardClassification::ward(WardType::Maternity, AcType::NonAc),
        "Maternity Ward (Non-AC)",
    ),
    row(
        WardKey::PediatricsAc,
        WardClassification::ward(WardType::Pediatrics, AcType::Ac),
        "Pediatrics Ward (AC)",
    ),
    row(
        WardKey::PediatricsNonAc,
        WardClassification::ward(WardType::Pediatrics, AcType::NonAc),
        "Pediatrics Ward (Non-AC)",
    ),
    row(
        WardKey::Icu,
        WardClassification::ward(WardType::Icu, AcType::NotApplicable),
        "ICU",
    ),
    row(
        WardKey::Emergency,
        WardClassification::ward(WardType::Emergency, AcType::NotApplicable),
        "Emergency",
    ),
    row(
        WardKey::Private1BedNoBath,
        WardClassification::private_room(RoomConfig::OneBedNoBath),
        "Private Room (1 Bed)",
    ),
    row(
        WardKey::Private1BedWithBath,
        WardClassification::private_room(RoomConfig::OneBedWithBath),
        "Private Room (1 Bed, Attached Bath)",
    ),
    row(
        WardKey::Private2BedWithBath,
        WardClassification::private_room(RoomConfig::TwoBedWithBath),
        "Private Room (2 Beds, Attached Bath)",
    ),
];

/// Catalog row for a key.
#[allow(clippy::indexing_slicing)] // WardKey discriminants are dense over 0..WARD_COUNT
pub fn entry(key: WardKey) -> WardEntry {
    CATALOG[key.index()]
}

pub fn classify(key: WardKey) -> WardClassification {
    entry(key).classification
}

/// Inverse of [`classify`]. `None` for tuples the catalog does not list.
pub fn key_for(classification: &WardClassification) -> Option<WardKey> {
    CATALOG
        .iter()
        .find(|e| e.classification == *classification)
        .map(|e| e.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_follow_key_order() {
        for (i, row) in CATALOG.iter().enumerate() {
            assert_eq!(row.key.index(), i);
        }
        assert_eq!(WardKey::ALL.len(), WARD_COUNT);
    }

    #[test]
    fn test_classify_round_trips_every_key() {
        for key in WardKey::ALL {
            assert_eq!(key_for(&classify(key)), Some(key));
        }
    }

    #[test]
    fn test_key_for_round_trips_every_classification() {
        for row in CATALOG {
            let key = key_for(&row.classification).unwrap();
            assert_eq!(classify(key), row.classification);
        }
    }

    #[test]
    fn test_classifications_are_unique() {
        for a in CATALOG {
            let matches = CATALOG
                .iter()
                .filter(|b| b.classification == a.classification)
                .count();
            assert_eq!(matches, 1, "{} is not unique", a.key);
        }
    }

    #[test]
    fn test_key_for_rejects_tuples_outside_catalog() {
        assert_eq!(key_for(&WardClassification::ward(WardType::Icu, AcType::Ac)), None);
        assert_eq!(
            key_for(&WardClassification::ward(WardType::General, AcType::NotApplicable)),
            None
        );
        let private_without_room = WardClassification {
            ward_type: WardType::PrivateRoom,
            ac_type: AcType::NotApplicable,
            room_config: None,
        };
        assert_eq!(key_for(&private_without_room), None);
    }

    #[test]
    fn test_ward_key_string_forms() {
        for key in WardKey::ALL {
            assert_eq!(key.as_str().parse::<WardKey>().unwrap(), key);
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!("dental".parse::<WardKey>().is_err());
        assert!("private_1_bed_no_bath".parse::<WardKey>().is_err());
    }

    #[test]
    fn test_regular_keys_join_ward_and_ac_type() {
        for row in CATALOG {
            let c = row.classification;
            if c.ward_type == WardType::PrivateRoom {
                continue;
            }
            let expected = if c.ac_type == AcType::NotApplicable {
                c.ward_type.as_str().to_string()
            } else {
                format!("{}_{}", c.ward_type, c.ac_type)
            };
            assert_eq!(row.key.as_str(), expected);
        }
    }

    #[test]
    fn test_classification_serializes_without_room_config_for_wards() {
        let json = serde_json::to_value(classify(WardKey::Icu)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ward_type": "icu", "ac_type": "not_applicable"})
        );

        let json = serde_json::to_value(classify(WardKey::Private2BedWithBath)).unwrap();
        assert_eq!(json["room_config"], "2_bed_with_bath");
        assert_eq!(json["ward_type"], "private_room");
    }

    #[test]
    fn test_labels() {
        assert_eq!(WardKey::GeneralAc.label(), "General Ward (AC)");
        assert_eq!(WardKey::Private1BedNoBath.label(), "Private Room (1 Bed)");
    }
}
