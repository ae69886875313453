//! Operating parameters for a simulation run

use fleetsim_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fuel price substituted by callers when the user supplies none (currency/liter)
pub const DEFAULT_FUEL_PRICE: f64 = 35.0;

/// Fuel price the cost model itself falls back to when none reaches it.
///
/// Differs from [`DEFAULT_FUEL_PRICE`]; both values are kept as-is until
/// product settles on one.
pub const COST_MODEL_FUEL_PRICE: f64 = 40.74;

/// Route duration the baseline metrics were recorded at (hours)
pub const BASELINE_ROUTE_DURATION_HOURS: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Fuel price (currency/liter)
    #[serde(default)]
    pub fuel_price: Option<f64>,
    /// Maximum route duration (hours)
    #[serde(default)]
    pub max_route_duration: Option<f64>,
    /// Collection strategy label; carried through, not used by the model
    #[serde(default)]
    pub collection_strategy: Option<String>,
}

impl SimulationParameters {
    /// Fill absent values the way the dashboard form did before calling the engine
    pub fn with_call_site_defaults(mut self) -> Self {
        self.fuel_price.get_or_insert(DEFAULT_FUEL_PRICE);
        self.max_route_duration.get_or_insert(BASELINE_ROUTE_DURATION_HOURS);
        self
    }

    /// Route duration in hours, defaulting to the baseline duration
    pub fn route_duration_hours(&self) -> f64 {
        self.max_route_duration.unwrap_or(BASELINE_ROUTE_DURATION_HOURS)
    }

    /// Fuel price as seen by the cost model
    pub fn cost_model_fuel_price(&self) -> f64 {
        self.fuel_price.unwrap_or(COST_MODEL_FUEL_PRICE)
    }

    /// Present values must be finite and positive. Absent values are fine.
    pub fn validate(&self) -> Result<()> {
        check_positive("fuel_price", self.fuel_price)?;
        check_positive("max_route_duration", self.max_route_duration)?;
        Ok(())
    }
}

fn check_positive(name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(Error::InvalidParameter(format!(
            "{} must be a positive number (got {})",
            name, v
        ))),
        _ => Ok(()),
    }
}
