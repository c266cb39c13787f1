use std::time::Duration;

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DbConn, MockDatabase};

use weather_core::ports::ForecastCache;
use weather_core::{CachedForecast, Coordinate};

use super::DurableForecastCache;
use super::entity::weather_cache;

fn coord() -> Coordinate {
    Coordinate::new(40.7128, -74.006).unwrap()
}

async fn sqlite_memory() -> DbConn {
    // One connection: every pooled `sqlite::memory:` connection is its own database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn test_latest_maps_row() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![weather_cache::Model {
            id: 7,
            latitude: 40.7128,
            longitude: -74.006,
            forecast: "Partly Cloudy".to_owned(),
            temp_c: 22.5,
            temp_f: 72.5,
            captured_at: now,
        }]])
        .into_connection();

    let cache = DurableForecastCache::new(db);
    let found = cache.latest(&coord()).await.unwrap().unwrap();

    assert_eq!(found.short_forecast, "Partly Cloudy");
    assert_eq!(found.temperature_c, 22.5);
    assert_eq!(found.captured_at, now);
}

#[tokio::test]
async fn test_mock_query_error_is_a_miss() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_errors([sea_orm::DbErr::Custom("disk I/O error".to_owned())])
        .into_connection();

    let cache = DurableForecastCache::new(db);

    assert!(cache.latest(&coord()).await.is_err());
    assert!(cache.get(&coord()).await.is_none());
}

#[tokio::test]
async fn test_round_trip() {
    let cache = DurableForecastCache::new(sqlite_memory().await);
    let forecast = CachedForecast::new(coord(), "Chance Showers", 14.25, 57.65);

    cache
        .put(&forecast, Some(Duration::from_secs(3600)))
        .await
        .unwrap();
    let read = cache.get(&coord()).await.unwrap();

    assert_eq!(read.short_forecast, "Chance Showers");
    assert_eq!(read.temperature_c, 14.25);
    assert_eq!(read.temperature_f, 57.65);
    assert_eq!(read.coordinate, coord().normalized());
}

#[tokio::test]
async fn test_inserts_accumulate_and_latest_wins() {
    let cache = DurableForecastCache::new(sqlite_memory().await);
    let now = Utc::now();

    for (text, age_min) in [("Oldest", 180), ("Newest", 5), ("Middle", 90)] {
        let forecast = CachedForecast::new(coord(), text, 20.0, 68.0)
            .with_captured_at(now - chrono::Duration::minutes(age_min));
        cache.put(&forecast, None).await.unwrap();
    }

    let read = cache.get(&coord()).await.unwrap();
    assert_eq!(read.short_forecast, "Newest");

    use sea_orm::{EntityTrait, PaginatorTrait};
    let rows = weather_cache::Entity::find()
        .count(cache.connection())
        .await
        .unwrap();
    assert_eq!(rows, 3);
}

#[tokio::test]
async fn test_same_timestamp_breaks_tie_by_insertion_order() {
    let cache = DurableForecastCache::new(sqlite_memory().await);
    let at = Utc::now();

    for text in ["First", "Second"] {
        let forecast = CachedForecast::new(coord(), text, 20.0, 68.0).with_captured_at(at);
        cache.put(&forecast, None).await.unwrap();
    }

    assert_eq!(cache.get(&coord()).await.unwrap().short_forecast, "Second");
}

#[tokio::test]
async fn test_stale_rows_are_kept() {
    let cache = DurableForecastCache::new(sqlite_memory().await);
    let old = CachedForecast::new(coord(), "Old Fog", 12.0, 53.6)
        .with_captured_at(Utc::now() - chrono::Duration::days(30));
    cache.put(&old, Some(Duration::from_secs(1))).await.unwrap();

    let read = cache.get(&coord()).await.unwrap();
    assert_eq!(read.short_forecast, "Old Fog");
}

#[tokio::test]
async fn test_exact_match_only() {
    let cache = DurableForecastCache::new(sqlite_memory().await);
    cache
        .put(&CachedForecast::new(coord(), "Clear", 18.0, 64.4), None)
        .await
        .unwrap();

    let neighbour = Coordinate::new(40.7129, -74.006).unwrap();
    assert!(cache.get(&neighbour).await.is_none());

    let same_key = Coordinate::new(40.71280004, -74.00599996).unwrap();
    assert!(cache.get(&same_key).await.is_some());
}
