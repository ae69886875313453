//! Repository trait definitions

use crate::model::BaselineProfile;
use fleetsim_types::Error;

/// Source of the reference metrics a simulation is compared against
pub trait BaselineRepository {
    /// Load the active baseline profile
    fn load(&self) -> Result<BaselineProfile, Error>;

    /// Human-readable origin of the baseline (file path, "built-in", ...)
    fn describe(&self) -> String;
}
