use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeatherCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeatherCache::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeatherCache::Latitude).double().not_null())
                    .col(ColumnDef::new(WeatherCache::Longitude).double().not_null())
                    .col(ColumnDef::new(WeatherCache::Forecast).text().not_null())
                    .col(ColumnDef::new(WeatherCache::TempC).double().not_null())
                    .col(ColumnDef::new(WeatherCache::TempF).double().not_null())
                    .col(
                        ColumnDef::new(WeatherCache::CapturedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups filter on the exact coordinate and take the newest row.
        manager
            .create_index(
                Index::create()
                    .name("idx_weather_cache_coordinate")
                    .table(WeatherCache::Table)
                    .col(WeatherCache::Latitude)
                    .col(WeatherCache::Longitude)
                    .col(WeatherCache::CapturedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeatherCache::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WeatherCache {
    Table,
    Id,
    Latitude,
    Longitude,
    Forecast,
    TempC,
    TempF,
    CapturedAt,
}
