//! Simulation output types

use serde::{Deserialize, Serialize};

use super::fleet::{FleetChange, FleetTotals};
use super::metrics::MetricSet;
use super::recommendation::Recommendation;

/// Per-metric change as a one-decimal string.
///
/// `collection_rate` holds the absolute point delta, all other fields are
/// relative to the baseline value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PercentageSet {
    pub km: String,
    pub fuel: String,
    pub co2: String,
    pub cost: String,
    pub collection_rate: String,
    pub routes: String,
    pub tonnage: String,
}

/// Output of the metric projection stage
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub simulated: MetricSet,
    pub changes: MetricSet,
    pub percentages: PercentageSet,
}

/// Complete outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub baseline: MetricSet,
    pub simulated: MetricSet,
    pub changes: MetricSet,
    pub percentages: PercentageSet,
    pub recommendation: Recommendation,
    /// Echo of the requested change
    pub fleet_changes: FleetChange,
    pub fleet_totals: FleetTotals,
    /// Linear model left its plausible range (negative distance, fuel, CO₂ or satisfaction)
    pub model_saturated: bool,
}
