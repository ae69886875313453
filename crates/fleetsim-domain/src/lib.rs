//! Fleet simulation domain: value model, simulation engine, repository traits

pub mod model;
pub mod repository;
pub mod service;
