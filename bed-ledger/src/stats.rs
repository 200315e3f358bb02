//! Capacity statistics shown on the bed-management dashboard

use crate::catalog::WardKey;
use crate::ledger::{BedCount, BedField};
use serde::{Deserialize, Serialize};

/// System-wide readiness for emergency routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    High,
    Medium,
    Low,
}

impl Readiness {
    /// `High` above 10 free beds, `Medium` for 1..=10, `Low` at 0.
    pub fn from_available(total_available: u64) -> Self {
        match total_available {
            0 => Readiness::Low,
            1..=10 => Readiness::Medium,
            _ => Readiness::High,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Readiness::High => "Ready for Emergencies",
            Readiness::Medium => "Limited Capacity",
            Readiness::Low => "Full Capacity",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Readiness::High => "Hospital is optimally prepared for emergency cases",
            Readiness::Medium => "Emergency cases will be routed only for critical needs",
            Readiness::Low => "No beds available for emergency routing",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub total_available: u64,
    pub total_capacity: u64,
}

impl CapacitySummary {
    pub fn readiness(&self) -> Readiness {
        Readiness::from_available(self.total_available)
    }
}

/// Per-ward occupancy band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    Normal,
    Elevated,
    Critical,
}

impl OccupancyLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 90.0 {
            OccupancyLevel::Critical
        } else if percent > 75.0 {
            OccupancyLevel::Elevated
        } else {
            OccupancyLevel::Normal
        }
    }
}

/// Per-ward availability badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityBadge {
    Plenty,
    Limited,
    Full,
}

impl AvailabilityBadge {
    pub fn from_available(available: u32) -> Self {
        match available {
            0 => AvailabilityBadge::Full,
            1..=5 => AvailabilityBadge::Limited,
            _ => AvailabilityBadge::Plenty,
        }
    }
}

/// Read-only view of one ward card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WardSnapshot {
    pub key: WardKey,
    pub label: &'static str,
    pub total: u32,
    pub available: u32,
    pub reserved: u32,
    pub occupied: i64,
    pub occupancy_percent: f64,
    pub level: OccupancyLevel,
    pub badge: AvailabilityBadge,
}

/// `occupied / total * 100`, or `0` for a ward with no beds.
#[allow(clippy::cast_precision_loss)]
pub fn occupancy_percent(count: &BedCount) -> f64 {
    let total = count.value(BedField::Total);
    if total == 0 {
        0.0
    } else {
        count.occupied() as f64 / f64::from(total) * 100.0
    }
}

impl WardSnapshot {
    pub(crate) fn new(key: WardKey, count: &BedCount) -> Self {
        let total = count.value(BedField::Total);
        let available = count.value(BedField::Available);
        let occupied = count.occupied();
        let occupancy_percent = occupancy_percent(count);

        Self {
            key,
            label: key.label(),
            total,
            available,
            reserved: count.value(BedField::Reserved),
            occupied,
            occupancy_percent,
            level: OccupancyLevel::from_percent(occupancy_percent),
            badge: AvailabilityBadge::from_available(available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_boundaries() {
        assert_eq!(Readiness::from_available(0), Readiness::Low);
        assert_eq!(Readiness::from_available(1), Readiness::Medium);
        assert_eq!(Readiness::from_available(10), Readiness::Medium);
        assert_eq!(Readiness::from_available(11), Readiness::High);
    }

    #[test]
    fn test_readiness_messages() {
        assert_eq!(Readiness::High.headline(), "Ready for Emergencies");
        assert_eq!(Readiness::Low.description(), "No beds available for emergency routing");
    }

    #[test]
    fn test_occupancy_level_boundaries() {
        assert_eq!(OccupancyLevel::from_percent(0.0), OccupancyLevel::Normal);
        assert_eq!(OccupancyLevel::from_percent(75.0), OccupancyLevel::Normal);
        assert_eq!(OccupancyLevel::from_percent(75.5), OccupancyLevel::Elevated);
        assert_eq!(OccupancyLevel::from_percent(90.0), OccupancyLevel::Elevated);
        assert_eq!(OccupancyLevel::from_percent(90.1), OccupancyLevel::Critical);
    }

    #[test]
    fn test_availability_badge_boundaries() {
        assert_eq!(AvailabilityBadge::from_available(0), AvailabilityBadge::Full);
        assert_eq!(AvailabilityBadge::from_available(1), AvailabilityBadge::Limited);
        assert_eq!(AvailabilityBadge::from_available(5), AvailabilityBadge::Limited);
        assert_eq!(AvailabilityBadge::from_available(6), AvailabilityBadge::Plenty);
    }

    #[test]
    fn test_snapshot_of_empty_ward() {
        let snapshot = WardSnapshot::new(WardKey::Icu, &BedCount::zero());
        assert_eq!(snapshot.occupancy_percent, 0.0);
        assert_eq!(snapshot.level, OccupancyLevel::Normal);
        assert_eq!(snapshot.badge, AvailabilityBadge::Full);
        assert_eq!(snapshot.label, "ICU");
    }

    #[test]
    fn test_snapshot_occupancy() {
        let snapshot = WardSnapshot::new(WardKey::GeneralAc, &BedCount::new(20, 1, 0));
        assert_eq!(snapshot.occupied, 19);
        assert!((snapshot.occupancy_percent - 95.0).abs() < 1e-9);
        assert_eq!(snapshot.level, OccupancyLevel::Critical);
        assert_eq!(snapshot.badge, AvailabilityBadge::Limited);
    }
}
