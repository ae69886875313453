//! Fleet composition and fleet-change types

use serde::{Deserialize, Serialize};

/// Signed change in vehicle count per class. Negative values shrink the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FleetChange {
    #[serde(default)]
    pub small_trucks: i32,
    #[serde(default)]
    pub large_trucks: i32,
    #[serde(default)]
    pub compactors: i32,
}

impl FleetChange {
    pub fn new(small_trucks: i32, large_trucks: i32, compactors: i32) -> Self {
        Self {
            small_trucks,
            large_trucks,
            compactors,
        }
    }

    /// Net change across all vehicle classes, widened so any deltas sum safely
    pub fn total_change(&self) -> i64 {
        i64::from(self.small_trucks) + i64::from(self.large_trucks) + i64::from(self.compactors)
    }
}

/// Vehicles currently in service, per class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetComposition {
    pub small_trucks: i32,
    pub large_trucks: i32,
    pub compactors: i32,
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self {
            small_trucks: 5,
            large_trucks: 10,
            compactors: 3,
        }
    }
}

impl FleetComposition {
    pub fn total(&self) -> i64 {
        i64::from(self.small_trucks) + i64::from(self.large_trucks) + i64::from(self.compactors)
    }

    /// Project per-class totals after applying a change. No floor is applied.
    pub fn apply(&self, change: &FleetChange) -> FleetTotals {
        FleetTotals {
            small_trucks: FleetClassTotal::new(self.small_trucks, change.small_trucks),
            large_trucks: FleetClassTotal::new(self.large_trucks, change.large_trucks),
            compactors: FleetClassTotal::new(self.compactors, change.compactors),
        }
    }
}

/// Current, change and projected count for one vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetClassTotal {
    pub current: i64,
    pub change: i64,
    pub projected: i64,
}

impl FleetClassTotal {
    fn new(current: i32, change: i32) -> Self {
        let (current, change) = (i64::from(current), i64::from(change));
        Self {
            current,
            change,
            projected: current + change,
        }
    }
}

/// Projected fleet after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetTotals {
    pub small_trucks: FleetClassTotal,
    pub large_trucks: FleetClassTotal,
    pub compactors: FleetClassTotal,
}

impl FleetTotals {
    /// Rows in display order, with English labels
    pub fn rows(&self) -> [(&'static str, FleetClassTotal); 3] {
        [
            ("Small trucks", self.small_trucks),
            ("Large trucks", self.large_trucks),
            ("Compactors", self.compactors),
        ]
    }

    pub fn projected_total(&self) -> i64 {
        self.small_trucks.projected + self.large_trucks.projected + self.compactors.projected
    }

    /// True if any class would end up with fewer than zero vehicles
    pub fn has_negative_class(&self) -> bool {
        self.rows().iter().any(|(_, row)| row.projected < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_change_sums_classes() {
        assert_eq!(FleetChange::new(2, -1, 3).total_change(), 4);
        assert_eq!(FleetChange::new(-5, -10, -3).total_change(), -18);
        assert_eq!(FleetChange::default().total_change(), 0);
    }

    #[test]
    fn test_apply_projects_each_class() {
        let totals = FleetComposition::default().apply(&FleetChange::new(2, -3, 0));
        assert_eq!(totals.small_trucks.projected, 7);
        assert_eq!(totals.large_trucks.projected, 7);
        assert_eq!(totals.compactors.projected, 3);
        assert_eq!(totals.projected_total(), 17);
        assert!(!totals.has_negative_class());
    }

    #[test]
    fn test_extreme_deltas_do_not_overflow() {
        let change = FleetChange::new(i32::MAX, 1, 0);
        assert_eq!(change.total_change(), i64::from(i32::MAX) + 1);
        assert_eq!(
            FleetChange::new(i32::MIN, i32::MIN, i32::MIN).total_change(),
            3 * i64::from(i32::MIN)
        );

        let totals = FleetComposition::default().apply(&FleetChange::new(i32::MAX, i32::MIN, 0));
        assert_eq!(totals.small_trucks.projected, i64::from(i32::MAX) + 5);
        assert_eq!(totals.large_trucks.projected, i64::from(i32::MIN) + 10);
        assert_eq!(
            totals.projected_total(),
            i64::from(i32::MAX) + i64::from(i32::MIN) + 18
        );
    }

    #[test]
    fn test_apply_allows_negative_projection() {
        let totals = FleetComposition::default().apply(&FleetChange::new(-8, 0, 0));
        assert_eq!(totals.small_trucks.projected, -3);
        assert!(totals.has_negative_class());
    }
}
