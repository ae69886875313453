//! File-based implementation of BaselineRepository

use std::path::PathBuf;

use fleetsim_domain::model::BaselineProfile;
use fleetsim_domain::repository::BaselineRepository;
use fleetsim_types::Error;

use crate::baseline_loader;

/// Baseline profile read from a TOML file on every load
pub struct FileBaselineRepository {
    toml_path: PathBuf,
}

impl FileBaselineRepository {
    /// Create a repository for a TOML file path. The file must exist.
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        if !toml_path.exists() {
            return Err(Error::FileNotFound(toml_path.display().to_string()));
        }
        Ok(Self { toml_path })
    }
}

impl BaselineRepository for FileBaselineRepository {
    fn load(&self) -> Result<BaselineProfile, Error> {
        baseline_loader::load_from_file(&self.toml_path)
    }

    fn describe(&self) -> String {
        self.toml_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_written_profile() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("baseline.toml");
        let mut profile = BaselineProfile::default();
        profile.metrics.km_driven = 7200.0;
        fs::write(&path, baseline_loader::to_toml_string(&profile).unwrap()).unwrap();

        let repo = FileBaselineRepository::new(path.clone()).unwrap();
        assert_eq!(repo.load().unwrap().metrics.km_driven, 7200.0);
        assert_eq!(repo.describe(), path.display().to_string());
    }

    #[test]
    fn test_reload_sees_edits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("baseline.toml");
        let mut profile = BaselineProfile::default();
        fs::write(&path, baseline_loader::to_toml_string(&profile).unwrap()).unwrap();
        let repo = FileBaselineRepository::new(path.clone()).unwrap();

        profile.fleet.compactors = 6;
        fs::write(&path, baseline_loader::to_toml_string(&profile).unwrap()).unwrap();
        assert_eq!(repo.load().unwrap().fleet.compactors, 6);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = FileBaselineRepository::new(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
