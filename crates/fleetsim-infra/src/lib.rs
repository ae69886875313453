//! Infrastructure layer - baseline loaders and repository implementations

pub mod baseline_loader;
pub mod persistence;
