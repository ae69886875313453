//! Application service layer - simulation use case, config, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
