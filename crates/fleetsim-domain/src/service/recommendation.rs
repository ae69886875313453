//! Recommendation scoring

use super::format::group_thousands;
use crate::model::{MetricSet, Recommendation};

const COST_SAVING_SCORE: i32 = 30;
const COST_INCREASE_SCORE: i32 = -20;
const FUEL_SAVING_SCORE: i32 = 20;
const CO2_REDUCTION_SCORE: i32 = 15;
const SERVICE_KEPT_SCORE: i32 = 25;
const SERVICE_DROP_SCORE: i32 = -30;
/// Largest collection-rate drop (points) still counted as maintained service
const SERVICE_DROP_TOLERANCE: f64 = -2.0;

/// Score a set of metric changes and pick the recommendation tier.
///
/// Depends only on the cost, fuel, CO₂ and collection-rate changes. Reasons
/// follow rule order: cost, fuel, CO₂, service quality.
pub fn recommend(changes: &MetricSet) -> Recommendation {
    let mut score = 0;
    let mut reasons = Vec::with_capacity(4);

    if changes.cost < 0.0 {
        score += COST_SAVING_SCORE;
        reasons.push(format!(
            "Saves {} per month",
            group_thousands(changes.cost.abs())
        ));
    } else {
        score += COST_INCREASE_SCORE;
        reasons.push(format!(
            "Costs {} extra per month",
            group_thousands(changes.cost.abs())
        ));
    }

    if changes.fuel_consumed < 0.0 {
        score += FUEL_SAVING_SCORE;
        reasons.push(format!("Saves {} liters of fuel", changes.fuel_consumed.abs()));
    }

    if changes.co2_emissions < 0.0 {
        score += CO2_REDUCTION_SCORE;
        reasons.push(format!(
            "Reduces CO₂ emissions by {} kg",
            changes.co2_emissions.abs()
        ));
    }

    if changes.collection_rate >= SERVICE_DROP_TOLERANCE {
        score += SERVICE_KEPT_SCORE;
        reasons.push("Service quality maintained".to_string());
    } else {
        score += SERVICE_DROP_SCORE;
        reasons.push("Service quality drops".to_string());
    }

    Recommendation::from_score(score, reasons)
}
