//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fleetsim_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fleetsim")]
#[command(version)]
#[command(about = "What-if simulation for waste-collection fleet changes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a fleet change against the baseline
    Simulate {
        /// Change in small trucks (negative to remove)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        small_trucks: i32,

        /// Change in large trucks (negative to remove)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        large_trucks: i32,

        /// Change in compactors (negative to remove)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        compactors: i32,

        /// Simulation period start (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Simulation period end (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Simulation name
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Fuel price per liter. Uses config value if not specified.
        #[arg(long)]
        fuel_price: Option<f64>,

        /// Maximum route duration in hours. Uses config value if not specified.
        #[arg(long)]
        max_route_duration: Option<f64>,

        /// Collection strategy label
        #[arg(long)]
        strategy: Option<String>,

        /// Baseline TOML file (overrides config)
        #[arg(long, short = 'b')]
        baseline: Option<PathBuf>,

        /// Write the run as JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Also export the run to an Excel workbook
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Export a saved simulation run to Excel
    Export {
        /// Path to JSON run file
        run: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show the active baseline profile
    Baseline {
        /// Baseline TOML file (overrides config)
        #[arg(long, short = 'b')]
        file: Option<PathBuf>,

        /// Write the active baseline as TOML to this file
        #[arg(long)]
        write_template: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fuel price per liter
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set default maximum route duration in hours
        #[arg(long)]
        set_max_route_duration: Option<f64>,

        /// Set default collection strategy
        #[arg(long)]
        set_strategy: Option<String>,

        /// Set baseline TOML file
        #[arg(long)]
        set_baseline: Option<PathBuf>,

        /// Use the built-in baseline again
        #[arg(long)]
        clear_baseline: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
