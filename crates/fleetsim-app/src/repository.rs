//! Repository adapters for the baseline source

use std::path::PathBuf;

use fleetsim_domain::repository::BaselineRepository;
use fleetsim_infra::persistence::{BuiltinBaselineRepository, FileBaselineRepository};
use fleetsim_types::Result;

use crate::config::Config;

/// Open the baseline repository: explicit file, then configured file, then built-in
pub fn open_baseline_repo(
    config: &Config,
    override_path: Option<PathBuf>,
) -> Result<Box<dyn BaselineRepository>> {
    match override_path.or_else(|| config.baseline_file.clone()) {
        Some(path) => Ok(Box::new(FileBaselineRepository::new(path)?)),
        None => Ok(Box::new(BuiltinBaselineRepository)),
    }
}
