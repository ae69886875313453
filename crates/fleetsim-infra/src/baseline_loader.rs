//! Baseline profile loader from TOML
//!
//! ```toml
//! [metrics]
//! km_driven = 5400
//! fuel_consumed = 1350
//! co2_emissions = 3510
//! cost = 285000
//! collection_rate = 100
//! satisfaction = 95
//! routes = 180
//! tonnage = 2700000
//!
//! [fleet]
//! small_trucks = 5
//! large_trucks = 10
//! compactors = 3
//! ```

use std::fs;
use std::path::Path;

use fleetsim_domain::model::BaselineProfile;
use fleetsim_types::{ConfigError, Error, Result};

/// Load and validate a baseline profile from a TOML file
pub fn load_from_file(path: &Path) -> Result<BaselineProfile> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read baseline file: {}",
            e
        )))
    })?;

    let profile = load_from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded baseline profile");
    Ok(profile)
}

/// Load and validate a baseline profile from a TOML string.
/// A missing `[fleet]` table falls back to the historical fleet.
pub fn load_from_str(toml_content: &str) -> Result<BaselineProfile> {
    let profile: BaselineProfile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse baseline TOML: {}",
            e
        )))
    })?;
    profile.validate()?;
    Ok(profile)
}

/// Render a profile as TOML, e.g. to seed a new baseline file
pub fn to_toml_string(profile: &BaselineProfile) -> Result<String> {
    toml::to_string_pretty(profile)
        .map_err(|e| Error::Config(ConfigError::SaveError(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[metrics]
km_driven = 6000
fuel_consumed = 1500.5
co2_emissions = 3900
cost = 300000
collection_rate = 98.5
satisfaction = 90
routes = 200
tonnage = 3000000

[fleet]
small_trucks = 4
large_trucks = 12
compactors = 2
"#;

    #[test]
    fn test_load_from_str() {
        let profile = load_from_str(TEST_TOML).unwrap();
        assert_eq!(profile.metrics.km_driven, 6000.0);
        assert_eq!(profile.metrics.fuel_consumed, 1500.5);
        assert_eq!(profile.metrics.collection_rate, 98.5);
        assert_eq!(profile.fleet.large_trucks, 12);
        assert_eq!(profile.fleet.total(), 18);
    }

    #[test]
    fn test_missing_fleet_uses_default() {
        let content = TEST_TOML.split("[fleet]").next().unwrap();
        let profile = load_from_str(content).unwrap();
        assert_eq!(profile.fleet.small_trucks, 5);
        assert_eq!(profile.fleet.compactors, 3);
    }

    #[test]
    fn test_missing_metric_is_parse_error() {
        let content = TEST_TOML.replace("routes = 200\n", "");
        let err = load_from_str(&content).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let content = TEST_TOML.replace("cost = 300000", "cost = 0");
        let err = load_from_str(&content).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseline(_)));
    }

    #[test]
    fn test_default_profile_survives_toml() {
        let default = BaselineProfile::default();
        let text = to_toml_string(&default).unwrap();
        assert!(text.contains("[metrics]"));
        assert_eq!(load_from_str(&text).unwrap(), default);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = load_from_file(Path::new("/nonexistent/baseline.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
