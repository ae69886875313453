//! Baseline repository serving the historical reference profile

use fleetsim_domain::model::BaselineProfile;
use fleetsim_domain::repository::BaselineRepository;
use fleetsim_types::Error;

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinBaselineRepository;

impl BaselineRepository for BuiltinBaselineRepository {
    fn load(&self) -> Result<BaselineProfile, Error> {
        Ok(BaselineProfile::default())
    }

    fn describe(&self) -> String {
        "built-in historical baseline".to_string()
    }
}
