//! Domain services

pub mod format;
pub mod projection;
pub mod recommendation;
pub mod report;
pub mod simulation;

pub use projection::{efficiency_factor, project, route_duration_factor, vehicle_cost_factor};
pub use recommendation::recommend;
pub use report::generate_simulation_report;
pub use simulation::simulate;
