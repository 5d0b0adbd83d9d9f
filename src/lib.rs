pub mod config;
pub mod domain;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
