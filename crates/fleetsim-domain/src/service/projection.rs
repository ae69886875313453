//! Metric projection: baseline + fleet change + parameters -> simulated metrics
//!
//! Simplified linear model. Distance, fuel and CO₂ scale with the efficiency
//! factor; nothing is clamped except the collection rate floor, so large fleet
//! increases drive the physical quantities negative.

use super::format::{format_one_decimal, round_half_up};
use crate::model::parameters::BASELINE_ROUTE_DURATION_HOURS;
use crate::model::{FleetChange, MetricSet, PercentageSet, Projection, SimulationParameters};

/// Efficiency change per vehicle added to the fleet
const EFFICIENCY_PER_VEHICLE: f64 = 0.05;
/// Operating cost change per vehicle added to the fleet
const COST_PER_VEHICLE: f64 = 0.03;
/// Collection rate points lost per vehicle changed, in either direction
const COLLECTION_RATE_PER_VEHICLE: f64 = 0.1;
const FULL_COLLECTION_RATE: f64 = 100.0;
const COLLECTION_RATE_FLOOR: f64 = 95.0;
/// Satisfaction points lost per vehicle changed, in either direction
const SATISFACTION_PER_VEHICLE: f64 = 1.5;
/// Extra waste collected per added vehicle (kg)
const TONNAGE_PER_VEHICLE: f64 = 5000.0;
const BASE_MAINTENANCE_COST: f64 = 150_000.0;
const BASE_PERSONNEL_COST: f64 = 80_000.0;

pub fn route_duration_factor(max_route_duration: f64) -> f64 {
    max_route_duration / BASELINE_ROUTE_DURATION_HOURS
}

pub fn efficiency_factor(total_change: i64, max_route_duration: f64) -> f64 {
    (1.0 - total_change as f64 * EFFICIENCY_PER_VEHICLE)
        * route_duration_factor(max_route_duration)
}

pub fn vehicle_cost_factor(total_change: i64) -> f64 {
    1.0 + total_change as f64 * COST_PER_VEHICLE
}

/// Project simulated metrics, their change against the baseline, and the
/// change percentages.
///
/// Percentages are taken from the already-rounded changes. The baseline must
/// have non-zero denominators, see `BaselineProfile::validate`.
pub fn project(
    baseline: &MetricSet,
    fleet_change: &FleetChange,
    parameters: &SimulationParameters,
) -> Projection {
    let total_change = fleet_change.total_change();
    let change_magnitude = (total_change as f64).abs();
    let duration_factor = route_duration_factor(parameters.route_duration_hours());
    let efficiency = efficiency_factor(total_change, parameters.route_duration_hours());
    let cost_factor = vehicle_cost_factor(total_change);

    let mut simulated = MetricSet {
        km_driven: round_half_up(baseline.km_driven * efficiency),
        fuel_consumed: round_half_up(baseline.fuel_consumed * efficiency),
        co2_emissions: round_half_up(baseline.co2_emissions * efficiency),
        cost: 0.0,
        collection_rate: COLLECTION_RATE_FLOOR
            .max(FULL_COLLECTION_RATE - change_magnitude * COLLECTION_RATE_PER_VEHICLE),
        satisfaction: round_half_up(
            baseline.satisfaction - change_magnitude * SATISFACTION_PER_VEHICLE,
        ),
        routes: round_half_up(baseline.routes * duration_factor),
        tonnage: round_half_up(
            baseline.tonnage * duration_factor + total_change as f64 * TONNAGE_PER_VEHICLE,
        ),
    };

    let fuel_cost = simulated.fuel_consumed * parameters.cost_model_fuel_price();
    let maintenance_cost = BASE_MAINTENANCE_COST * cost_factor;
    let personnel_cost = BASE_PERSONNEL_COST * cost_factor;
    simulated.cost = round_half_up(fuel_cost + maintenance_cost + personnel_cost);

    let changes = simulated.difference(baseline);
    let percentages = percentages(baseline, &changes);

    Projection {
        simulated,
        changes,
        percentages,
    }
}

fn relative(change: f64, base: f64) -> String {
    format_one_decimal(change / base * 100.0)
}

fn percentages(baseline: &MetricSet, changes: &MetricSet) -> PercentageSet {
    PercentageSet {
        km: relative(changes.km_driven, baseline.km_driven),
        fuel: relative(changes.fuel_consumed, baseline.fuel_consumed),
        co2: relative(changes.co2_emissions, baseline.co2_emissions),
        cost: relative(changes.cost, baseline.cost),
        collection_rate: format_one_decimal(changes.collection_rate),
        routes: relative(changes.routes, baseline.routes),
        tonnage: relative(changes.tonnage, baseline.tonnage),
    }
}
