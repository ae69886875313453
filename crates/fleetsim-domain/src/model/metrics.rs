//! Metric set shared by baseline, simulated and change values

use serde::{Deserialize, Serialize};

/// One month of collection-fleet metrics.
///
/// The same shape is used for the baseline, the simulated outcome and the
/// signed per-field difference between the two.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    /// Distance driven (km)
    pub km_driven: f64,
    /// Fuel consumed (liters)
    pub fuel_consumed: f64,
    /// CO₂ emissions (kg)
    pub co2_emissions: f64,
    /// Monthly operating cost (currency)
    pub cost: f64,
    /// Collection rate (%)
    pub collection_rate: f64,
    /// Citizen satisfaction score (0-100)
    pub satisfaction: f64,
    /// Number of routes driven
    pub routes: f64,
    /// Waste collected (kg)
    pub tonnage: f64,
}

impl MetricSet {
    /// Signed per-field difference `self - other`
    pub fn difference(&self, other: &MetricSet) -> MetricSet {
        MetricSet {
            km_driven: self.km_driven - other.km_driven,
            fuel_consumed: self.fuel_consumed - other.fuel_consumed,
            co2_emissions: self.co2_emissions - other.co2_emissions,
            cost: self.cost - other.cost,
            collection_rate: self.collection_rate - other.collection_rate,
            satisfaction: self.satisfaction - other.satisfaction,
            routes: self.routes - other.routes,
            tonnage: self.tonnage - other.tonnage,
        }
    }
}
