//! Baseline repository implementations

mod builtin_baseline_repo;
mod file_baseline_repo;

pub use builtin_baseline_repo::BuiltinBaselineRepository;
pub use file_baseline_repo::FileBaselineRepository;
