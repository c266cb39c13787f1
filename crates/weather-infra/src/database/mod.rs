//! Durable cache storage - connection management, entities and the SeaORM layer.

mod connections;
mod durable;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use durable::DurableForecastCache;

#[cfg(test)]
mod tests;
