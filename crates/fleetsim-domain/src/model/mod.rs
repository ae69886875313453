//! Domain model types

pub mod baseline;
pub mod fleet;
pub mod metrics;
pub mod parameters;
pub mod recommendation;
pub mod simulation;

pub use baseline::BaselineProfile;
pub use fleet::{FleetChange, FleetClassTotal, FleetComposition, FleetTotals};
pub use metrics::MetricSet;
pub use parameters::SimulationParameters;
pub use recommendation::{Recommendation, RecommendationLevel};
pub use simulation::{PercentageSet, Projection, SimulationResult};
