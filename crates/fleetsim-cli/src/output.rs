//! Output formatting module

use fleetsim_app::app::SimulationRun;
use fleetsim_domain::model::BaselineProfile;
use fleetsim_domain::service::generate_simulation_report;
use fleetsim_types::{OutputFormat, Result};

pub fn output_run(output_format: OutputFormat, run: &SimulationRun) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(run)?;
        println!("{}", content);
    } else {
        println!("\nSimulation:  {}", run.name);
        println!("Period:      {} - {}", run.start_date, run.end_date);
        println!("Baseline:    {}", run.baseline_source);
        if let Some(ref strategy) = run.parameters.collection_strategy {
            println!("Strategy:    {}", strategy);
        }
        println!();
        print!("{}", generate_simulation_report(&run.result));
    }

    Ok(())
}

pub fn output_baseline(
    output_format: OutputFormat,
    source: &str,
    baseline: &BaselineProfile,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(baseline)?;
        println!("{}", content);
        return Ok(());
    }

    let m = &baseline.metrics;
    println!("\nBaseline ({})", source);
    println!("==============================");
    println!("Distance:        {} km", m.km_driven);
    println!("Fuel:            {} L", m.fuel_consumed);
    println!("CO₂:             {} kg", m.co2_emissions);
    println!("Cost / month:    {}", m.cost);
    println!("Collection rate: {:.1}%", m.collection_rate);
    println!("Satisfaction:    {}", m.satisfaction);
    println!("Routes:          {}", m.routes);
    println!("Tonnage:         {} kg", m.tonnage);
    println!("\nFleet");
    println!("Small trucks:    {}", baseline.fleet.small_trucks);
    println!("Large trucks:    {}", baseline.fleet.large_trucks);
    println!("Compactors:      {}", baseline.fleet.compactors);
    Ok(())
}
