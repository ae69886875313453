//! Simulation Service - the fleet change what-if use case
//!
//! 1. Validate the request (period, name)
//! 2. Resolve parameter defaults from config
//! 3. Load the baseline profile
//! 4. Run the domain simulation
//! 5. Stamp the run with metadata

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use fleetsim_domain::model::{FleetChange, SimulationParameters, SimulationResult};
use fleetsim_domain::repository::BaselineRepository;
use fleetsim_domain::service::{efficiency_factor, simulate};
use fleetsim_types::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const UNTITLED_SIMULATION: &str = "Untitled simulation";

/// User input for one simulation run
#[derive(Debug, Clone, Default)]
pub struct SimulationRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub fleet_change: FleetChange,
    pub parameters: SimulationParameters,
}

/// A completed simulation with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Where the baseline came from
    pub baseline_source: String,
    /// Parameters after defaults were applied
    pub parameters: SimulationParameters,
    pub result: SimulationResult,
}

impl SimulationRequest {
    fn resolve_period(&self) -> Result<(NaiveDate, NaiveDate)> {
        let (start, end) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(Error::InvalidParameter(
                    "both a start date and an end date are required".to_string(),
                ))
            }
        };
        if end < start {
            return Err(Error::InvalidParameter(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        Ok((start, end))
    }

    fn resolve_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNTITLED_SIMULATION.to_string(),
        }
    }

    /// Absent parameters take the configured defaults
    fn resolve_parameters(&self, config: &Config) -> SimulationParameters {
        let mut parameters = self.parameters.clone();
        parameters.fuel_price.get_or_insert(config.fuel_price);
        parameters
            .max_route_duration
            .get_or_insert(config.max_route_duration);
        if parameters.collection_strategy.is_none() {
            parameters.collection_strategy = config.collection_strategy.clone();
        }
        parameters.with_call_site_defaults()
    }
}

/// Run a simulation request against the given baseline source
pub fn run_simulation(
    request: &SimulationRequest,
    baseline_repo: &dyn BaselineRepository,
    config: &Config,
) -> Result<SimulationRun> {
    let (start_date, end_date) = request.resolve_period()?;
    let name = request.resolve_name();
    let parameters = request.resolve_parameters(config);
    parameters.validate()?;

    let baseline = baseline_repo.load()?;
    let total_change = request.fleet_change.total_change();

    tracing::info!(
        name = %name,
        total_change,
        baseline = %baseline_repo.describe(),
        "running fleet simulation"
    );
    tracing::debug!(
        efficiency = efficiency_factor(total_change, parameters.route_duration_hours()),
        fuel_price = parameters.cost_model_fuel_price(),
        route_duration = parameters.route_duration_hours(),
        "resolved simulation factors"
    );

    let result = simulate(&baseline, &request.fleet_change, &parameters)?;

    if result.model_saturated {
        tracing::warn!(
            total_change,
            "fleet change is outside the linear model's range; negative metrics reported"
        );
    }
    for (label, row) in result.fleet_totals.rows() {
        if row.projected < 0 {
            tracing::warn!(
                class = label,
                projected = row.projected,
                "fleet class would go negative"
            );
        }
    }
    tracing::info!(
        level = %result.recommendation.level,
        score = result.recommendation.score,
        "simulation complete"
    );

    Ok(SimulationRun {
        name,
        start_date,
        end_date,
        created_at: Utc::now(),
        baseline_source: baseline_repo.describe(),
        parameters,
        result,
    })
}

/// Write a run as pretty JSON
pub fn save_run(run: &SimulationRun, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(run)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a run previously written by [`save_run`]
pub fn load_run(path: &Path) -> Result<SimulationRun> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetsim_domain::model::{BaselineProfile, RecommendationLevel};

    struct FixedBaseline(BaselineProfile);

    impl BaselineRepository for FixedBaseline {
        fn load(&self) -> Result<BaselineProfile> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> SimulationRequest {
        SimulationRequest {
            name: Some("Q3 expansion".to_string()),
            start_date: Some(date(2026, 7, 1)),
            end_date: Some(date(2026, 9, 30)),
            fleet_change: FleetChange::new(1, 1, 0),
            parameters: SimulationParameters::default(),
        }
    }

    fn repo() -> FixedBaseline {
        FixedBaseline(BaselineProfile::default())
    }

    #[test]
    fn test_run_uses_config_defaults() {
        let run = run_simulation(&request(), &repo(), &Config::default()).unwrap();
        assert_eq!(run.name, "Q3 expansion");
        assert_eq!(run.parameters.fuel_price, Some(35.0));
        assert_eq!(run.parameters.max_route_duration, Some(8.0));
        assert_eq!(run.result.percentages.km, "-10.0");
        assert_eq!(run.result.recommendation.level, RecommendationLevel::Recommended);
        assert_eq!(run.baseline_source, "fixed");
    }

    #[test]
    fn test_request_parameters_override_config() {
        let mut req = request();
        req.parameters.fuel_price = Some(20.0);
        let config = Config {
            fuel_price: 50.0,
            collection_strategy: Some("nightly".to_string()),
            ..Config::default()
        };
        let run = run_simulation(&req, &repo(), &config).unwrap();
        assert_eq!(run.parameters.fuel_price, Some(20.0));
        assert_eq!(run.parameters.collection_strategy.as_deref(), Some("nightly"));
        // 1215 * 20 + 243800
        assert_eq!(run.result.simulated.cost, 268_100.0);
    }

    #[test]
    fn test_blank_name_defaults() {
        let mut req = request();
        req.name = Some("   ".to_string());
        let run = run_simulation(&req, &repo(), &Config::default()).unwrap();
        assert_eq!(run.name, "Untitled simulation");
    }

    #[test]
    fn test_missing_dates_rejected() {
        let mut req = request();
        req.end_date = None;
        let err = run_simulation(&req, &repo(), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_reversed_period_rejected() {
        let mut req = request();
        req.start_date = Some(date(2026, 10, 1));
        let err = run_simulation(&req, &repo(), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(ref msg) if msg.contains("before")));
    }

    #[test]
    fn test_single_day_period_allowed() {
        let mut req = request();
        req.end_date = req.start_date;
        assert!(run_simulation(&req, &repo(), &Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_fuel_price_rejected() {
        let config = Config {
            fuel_price: -1.0,
            ..Config::default()
        };
        let err = run_simulation(&request(), &repo(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_baseline_error_propagates() {
        let mut baseline = BaselineProfile::default();
        baseline.metrics.km_driven = 0.0;
        let err = run_simulation(&request(), &FixedBaseline(baseline), &Config::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBaseline(_)));
    }
}
