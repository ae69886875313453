//! Application use cases

pub mod simulation_service;

pub use simulation_service::{load_run, run_simulation, save_run, SimulationRequest, SimulationRun};
