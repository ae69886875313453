//! Full simulation: projection followed by recommendation scoring

use fleetsim_types::Result;

use super::{project, recommend};
use crate::model::{BaselineProfile, FleetChange, SimulationParameters, SimulationResult};

/// Run the fleet change simulation against a baseline.
///
/// Fails only if the baseline has an unusable denominator or a parameter is
/// present but not a positive number.
pub fn simulate(
    baseline: &BaselineProfile,
    fleet_change: &FleetChange,
    parameters: &SimulationParameters,
) -> Result<SimulationResult> {
    baseline.validate()?;
    parameters.validate()?;

    let projection = project(&baseline.metrics, fleet_change, parameters);
    let recommendation = recommend(&projection.changes);
    let simulated = projection.simulated;
    let model_saturated = simulated.km_driven < 0.0
        || simulated.fuel_consumed < 0.0
        || simulated.co2_emissions < 0.0
        || simulated.satisfaction < 0.0;

    Ok(SimulationResult {
        baseline: baseline.metrics,
        simulated,
        changes: projection.changes,
        percentages: projection.percentages,
        recommendation,
        fleet_changes: *fleet_change,
        fleet_totals: baseline.fleet.apply(fleet_change),
        model_saturated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecommendationLevel;
    use fleetsim_types::Error;

    fn params() -> SimulationParameters {
        SimulationParameters {
            fuel_price: Some(35.0),
            max_route_duration: Some(8.0),
            collection_strategy: Some("standard".to_string()),
        }
    }

    #[test]
    fn test_unchanged_fleet() {
        let result = simulate(&BaselineProfile::default(), &FleetChange::default(), &params())
            .unwrap();
        assert_eq!(result.changes.cost, -7750.0);
        // cost saving + service kept
        assert_eq!(result.recommendation.score, 55);
        assert_eq!(
            result.recommendation.level,
            RecommendationLevel::StronglyRecommended
        );
        assert_eq!(
            result.recommendation.reasons,
            vec!["Saves 7,750 per month", "Service quality maintained"]
        );
        assert!(!result.model_saturated);
        assert_eq!(result.fleet_totals.projected_total(), 18);
    }

    #[test]
    fn test_two_more_vehicles() {
        let change = FleetChange::new(2, 0, 0);
        let result = simulate(&BaselineProfile::default(), &change, &params()).unwrap();
        assert_eq!(result.percentages.km, "-10.0");
        assert_eq!(result.recommendation.score, 40);
        assert_eq!(result.recommendation.level, RecommendationLevel::Recommended);
        assert_eq!(result.fleet_changes, change);
        assert_eq!(result.fleet_totals.small_trucks.projected, 7);
    }

    #[test]
    fn test_saturated_model_flagged() {
        let result = simulate(
            &BaselineProfile::default(),
            &FleetChange::new(10, 10, 5),
            &params(),
        )
        .unwrap();
        assert!(result.simulated.km_driven < 0.0);
        assert!(result.model_saturated);
    }

    #[test]
    fn test_extreme_fleet_change_does_not_overflow() {
        let result = simulate(
            &BaselineProfile::default(),
            &FleetChange::new(i32::MAX, 1, 0),
            &SimulationParameters::default().with_call_site_defaults(),
        )
        .unwrap();
        assert!(result.model_saturated);
        assert_eq!(result.simulated.collection_rate, 95.0);
        assert_eq!(
            result.fleet_totals.small_trucks.projected,
            i64::from(i32::MAX) + 5
        );
    }

    #[test]
    fn test_negative_satisfaction_flagged() {
        // efficiency stays positive for a reduction, satisfaction does not
        let result = simulate(
            &BaselineProfile::default(),
            &FleetChange::new(-40, -30, 0),
            &params(),
        )
        .unwrap();
        assert!(result.simulated.km_driven > 0.0);
        assert!(result.simulated.satisfaction < 0.0);
        assert!(result.model_saturated);
    }

    #[test]
    fn test_invalid_baseline_rejected() {
        let mut baseline = BaselineProfile::default();
        baseline.metrics.cost = 0.0;
        let err = simulate(&baseline, &FleetChange::default(), &params()).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseline(_)));
    }

    #[test]
    fn test_invalid_parameter_rejected() {
        let parameters = SimulationParameters {
            max_route_duration: Some(0.0),
            ..params()
        };
        let err = simulate(&BaselineProfile::default(), &FleetChange::default(), &parameters)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_result_json_shape() {
        let result = simulate(&BaselineProfile::default(), &FleetChange::default(), &params())
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["percentages"]["km"], "0.0");
        assert_eq!(json["recommendation"]["level"], "STRONGLY_RECOMMENDED");
        assert_eq!(json["recommendation"]["css_class"], "recommended");
        assert_eq!(json["fleet_changes"]["compactors"], 0);
        assert_eq!(json["baseline"]["km_driven"], 5400.0);
    }
}
