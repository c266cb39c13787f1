//! SeaORM entities.

pub mod weather_cache;
