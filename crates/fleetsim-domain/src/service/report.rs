//! Plain-text simulation report

use super::format::{format_one_decimal, group_thousands, signed};
use crate::model::SimulationResult;

pub fn generate_simulation_report(result: &SimulationResult) -> String {
    let rec = &result.recommendation;
    let sim = &result.simulated;
    let chg = &result.changes;
    let pct = &result.percentages;

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("            Fleet Change Simulation Report         \n");
    report.push_str("==================================================\n\n");

    report.push_str(&format!("【Recommendation: {}】\n", rec.level.label()));
    report.push_str(&format!("  {}\n", rec.action));
    report.push_str(&format!("  Score: {}\n", rec.score));
    for reason in &rec.reasons {
        report.push_str(&format!("  - {}\n", reason));
    }
    report.push('\n');

    report.push_str("【Metrics】\n");
    report.push_str("-".repeat(66).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<18} {:>14} {:>16} {:>14}\n",
        "Metric", "Simulated", "Change", "Change %"
    ));
    report.push_str("-".repeat(66).as_str());
    report.push('\n');

    let amount_rows = [
        ("Distance (km)", sim.km_driven, chg.km_driven, &pct.km),
        ("Fuel (L)", sim.fuel_consumed, chg.fuel_consumed, &pct.fuel),
        ("CO₂ (kg)", sim.co2_emissions, chg.co2_emissions, &pct.co2),
        ("Cost / month", sim.cost, chg.cost, &pct.cost),
        ("Routes", sim.routes, chg.routes, &pct.routes),
        ("Tonnage (kg)", sim.tonnage, chg.tonnage, &pct.tonnage),
    ];
    for (label, value, change, percentage) in amount_rows {
        report.push_str(&format!(
            "{:<18} {:>14} {:>16} {:>13}%\n",
            label,
            group_thousands(value),
            signed(change, &group_thousands(change)),
            signed(change, percentage)
        ));
    }
    report.push_str(&format!(
        "{:<18} {:>13.1}% {:>12} pts {:>14}\n",
        "Collection rate",
        sim.collection_rate,
        signed(chg.collection_rate, &format_one_decimal(chg.collection_rate)),
        ""
    ));
    report.push_str(&format!(
        "{:<18} {:>14} {:>12} pts {:>14}\n",
        "Satisfaction",
        format!("{}", sim.satisfaction),
        signed(chg.satisfaction, &format!("{}", chg.satisfaction)),
        ""
    ));
    report.push('\n');

    report.push_str("【Fleet】\n");
    report.push_str(&format!(
        "{:<18} {:>8} {:>8} {:>10}\n",
        "Class", "Current", "Change", "Projected"
    ));
    for (label, row) in result.fleet_totals.rows() {
        let change = if row.change > 0 {
            format!("+{}", row.change)
        } else {
            row.change.to_string()
        };
        report.push_str(&format!(
            "{:<18} {:>8} {:>8} {:>10}\n",
            label, row.current, change, row.projected
        ));
    }
    report.push('\n');

    if result.model_saturated {
        report.push_str("【Warning】\n");
        report.push_str("  The linear model is outside its valid range for this change.\n");
        report.push_str(
            "  Negative distance, fuel, CO₂ or satisfaction values are not physical.\n\n",
        );
    }

    report.push_str("==================================================\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaselineProfile, FleetChange, SimulationParameters};
    use crate::service::simulate;

    fn params() -> SimulationParameters {
        SimulationParameters {
            fuel_price: Some(35.0),
            max_route_duration: Some(8.0),
            collection_strategy: None,
        }
    }

    #[test]
    fn test_report_contents() {
        let result = simulate(
            &BaselineProfile::default(),
            &FleetChange::new(2, 0, 0),
            &params(),
        )
        .unwrap();
        let report = generate_simulation_report(&result);
        assert!(report.contains("Fleet Change Simulation Report"));
        assert!(report.contains("【Recommendation: RECOMMENDED】"));
        assert!(report.contains("Costs 1,325 extra per month"));
        assert!(report.contains("4,860"));
        assert!(report.contains("-540"));
        assert!(report.contains("-10.0%"));
        assert!(report.contains("Small trucks"));
        assert!(!report.contains("Warning"));
    }

    #[test]
    fn test_report_warns_when_saturated() {
        let result = simulate(
            &BaselineProfile::default(),
            &FleetChange::new(30, 0, 0),
            &params(),
        )
        .unwrap();
        let report = generate_simulation_report(&result);
        assert!(report.contains("Warning"));
        assert!(report.contains("NOT RECOMMENDED"));
        assert!(report.contains("Service quality drops"));
    }
}
