//! Durable forecast rows. Insert-only; one row per successful upstream fetch.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use weather_core::{CachedForecast, Coordinate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weather_cache")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[sea_orm(column_type = "Text")]
    pub forecast: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub captured_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert a stored row back into a forecast.
    ///
    /// Fails only if the row holds an out-of-range coordinate.
    pub fn into_forecast(self) -> Result<CachedForecast, weather_core::DomainError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)?;
        Ok(CachedForecast {
            coordinate,
            short_forecast: self.forecast,
            temperature_c: self.temp_c,
            temperature_f: self.temp_f,
            captured_at: self.captured_at,
        })
    }
}

/// New row for a forecast, keyed on the normalized coordinate.
impl From<&CachedForecast> for ActiveModel {
    fn from(forecast: &CachedForecast) -> Self {
        let key = forecast.coordinate.normalized();
        Self {
            latitude: Set(key.latitude()),
            longitude: Set(key.longitude()),
            forecast: Set(forecast.short_forecast.clone()),
            temp_c: Set(forecast.temperature_c),
            temp_f: Set(forecast.temperature_f),
            captured_at: Set(forecast.captured_at),
            ..Default::default()
        }
    }
}
