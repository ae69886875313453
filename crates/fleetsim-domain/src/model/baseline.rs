//! Baseline reference profile

use fleetsim_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::fleet::FleetComposition;
use super::metrics::MetricSet;

/// Historical reference metrics and the fleet that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineProfile {
    pub metrics: MetricSet,
    #[serde(default)]
    pub fleet: FleetComposition,
}

impl Default for BaselineProfile {
    fn default() -> Self {
        Self {
            metrics: MetricSet {
                km_driven: 5400.0,
                fuel_consumed: 1350.0,
                co2_emissions: 3510.0,
                cost: 285000.0,
                collection_rate: 100.0,
                satisfaction: 95.0,
                routes: 180.0,
                tonnage: 2_700_000.0,
            },
            fleet: FleetComposition::default(),
        }
    }
}

impl BaselineProfile {
    /// Reject metrics that are later used as percentage denominators
    pub fn validate(&self) -> Result<()> {
        let m = &self.metrics;
        let denominators = [
            ("km_driven", m.km_driven),
            ("fuel_consumed", m.fuel_consumed),
            ("co2_emissions", m.co2_emissions),
            ("cost", m.cost),
            ("routes", m.routes),
            ("tonnage", m.tonnage),
        ];
        for (field, value) in denominators {
            if !value.is_finite() || value == 0.0 {
                return Err(Error::InvalidBaseline(format!(
                    "{} must be a non-zero number (got {})",
                    field, value
                )));
            }
        }
        if !m.collection_rate.is_finite() || !m.satisfaction.is_finite() {
            return Err(Error::InvalidBaseline(
                "collection_rate and satisfaction must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
