//! Command handlers

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fleetsim_app::app::{load_run, run_simulation, save_run, SimulationRequest};
use fleetsim_app::config::Config;
use fleetsim_app::export::export_to_excel;
use fleetsim_app::repository::open_baseline_repo;
use fleetsim_domain::model::{FleetChange, SimulationParameters};
use fleetsim_infra::baseline_loader;
use fleetsim_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_baseline, output_run};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Simulate {
            small_trucks,
            large_trucks,
            compactors,
            start,
            end,
            name,
            fuel_price,
            max_route_duration,
            strategy,
            baseline,
            output,
            xlsx,
        } => {
            let request = SimulationRequest {
                name,
                start_date: Some(start),
                end_date: Some(end),
                fleet_change: FleetChange::new(small_trucks, large_trucks, compactors),
                parameters: SimulationParameters {
                    fuel_price,
                    max_route_duration,
                    collection_strategy: strategy,
                },
            };
            cmd_simulate(&config, request, baseline, output, xlsx, output_format)
        }

        Commands::Export { run, output } => cmd_export(&run, output),

        Commands::Baseline {
            file,
            write_template,
        } => cmd_baseline(&config, file, write_template, output_format),

        Commands::Config {
            show,
            set_output,
            set_fuel_price,
            set_max_route_duration,
            set_strategy,
            set_baseline,
            clear_baseline,
            reset,
        } => {
            if reset {
                config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults.");
                return Ok(());
            }

            let mut changed = false;
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }
            if let Some(price) = set_fuel_price {
                SimulationParameters {
                    fuel_price: Some(price),
                    ..Default::default()
                }
                .validate()?;
                config.fuel_price = price;
                changed = true;
            }
            if let Some(hours) = set_max_route_duration {
                SimulationParameters {
                    max_route_duration: Some(hours),
                    ..Default::default()
                }
                .validate()?;
                config.max_route_duration = hours;
                changed = true;
            }
            if let Some(strategy) = set_strategy {
                config.collection_strategy = Some(strategy);
                changed = true;
            }
            if let Some(path) = set_baseline {
                // fail early on unreadable baselines
                baseline_loader::load_from_file(&path)?;
                config.baseline_file = Some(path);
                changed = true;
            }
            if clear_baseline {
                config.baseline_file = None;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                println!("{}", config);
            }
            Ok(())
        }
    }
}

fn cmd_simulate(
    config: &Config,
    request: SimulationRequest,
    baseline: Option<PathBuf>,
    output: Option<PathBuf>,
    xlsx: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_baseline_repo(config, baseline)?;
    let run = run_simulation(&request, repo.as_ref(), config)?;

    output_run(output_format, &run)?;

    if let Some(path) = output {
        save_run(&run, &path)?;
        eprintln!("Run saved to: {}", path.display());
    }
    if let Some(path) = xlsx {
        export_to_excel(&run, &path)?;
        eprintln!("Workbook written to: {}", path.display());
    }
    Ok(())
}

fn cmd_export(run_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let run = load_run(run_path)?;
    let output_path = output.unwrap_or_else(|| default_export_path(&run.name, run.start_date));
    export_to_excel(&run, &output_path)?;
    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_baseline(
    config: &Config,
    file: Option<PathBuf>,
    write_template: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_baseline_repo(config, file)?;
    let baseline = repo.load()?;

    if let Some(path) = write_template {
        std::fs::write(&path, baseline_loader::to_toml_string(&baseline)?)?;
        println!("Baseline written to: {}", path.display());
        return Ok(());
    }

    output_baseline(output_format, &repo.describe(), &baseline)
}

/// `<name>_<start>.xlsx` with path-unsafe characters replaced
fn default_export_path(name: &str, start: NaiveDate) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    PathBuf::from(format!("{}_{}.xlsx", stem, start.format("%Y%m%d")))
}
