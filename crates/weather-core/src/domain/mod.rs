//! Domain entities - the core business objects.

mod coordinate;
mod forecast;
mod temperature;

pub use coordinate::Coordinate;
pub use forecast::{CachedForecast, FRESHNESS_WINDOW, ForecastResult, ForecastSource};
pub use temperature::{TemperatureBand, classify};
