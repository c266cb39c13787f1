//! Durable cache layer backed by SeaORM.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};

use weather_core::ports::{CacheError, ForecastCache, ReadPolicy};
use weather_core::{CachedForecast, Coordinate};

use super::entity::weather_cache::{self, Entity as WeatherCacheEntity};

/// Append-only forecast store.
///
/// Every `put` inserts a new row; `get` returns the most recent row for the
/// exact normalized coordinate. Rows are never updated or deleted, so the
/// table grows with every upstream fetch.
pub struct DurableForecastCache {
    db: DbConn,
}

impl DurableForecastCache {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &DbConn {
        &self.db
    }

    /// Most recent row for the coordinate, surfacing database errors.
    pub async fn latest(&self, coordinate: &Coordinate) -> Result<Option<CachedForecast>, CacheError> {
        let key = coordinate.normalized();

        let row = WeatherCacheEntity::find()
            .filter(weather_cache::Column::Latitude.eq(key.latitude()))
            .filter(weather_cache::Column::Longitude.eq(key.longitude()))
            .order_by_desc(weather_cache::Column::CapturedAt)
            .order_by_desc(weather_cache::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))?;

        row.map(|model| {
            model
                .into_forecast()
                .map_err(|e| CacheError::Serialization(e.to_string()))
        })
        .transpose()
    }
}

#[async_trait]
impl ForecastCache for DurableForecastCache {
    fn name(&self) -> &str {
        "database"
    }

    fn read_policy(&self) -> ReadPolicy {
        ReadPolicy::CheckFreshness
    }

    async fn get(&self, coordinate: &Coordinate) -> Option<CachedForecast> {
        match self.latest(coordinate).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(%coordinate, error = %e, "Durable cache read failed");
                None
            }
        }
    }

    /// Inserts a row. `ttl` is ignored; freshness is judged at read time.
    async fn put(
        &self,
        forecast: &CachedForecast,
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let row: weather_cache::ActiveModel = forecast.into();

        WeatherCacheEntity::insert(row)
            .exec(&self.db)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))?;

        tracing::debug!(coordinate = %forecast.coordinate, "Forecast persisted");
        Ok(())
    }
}
