use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeedingOverride::Table)
                    .if_not_exists()
                    .col(pk_auto(SeedingOverride::Id))
                    .col(integer_null(SeedingOverride::TrackerId))
                    .col(string_null(SeedingOverride::TrackerName))
                    .col(big_integer_null(SeedingOverride::MinSeedingTimeSeconds))
                    .col(double_null(SeedingOverride::MinRatio))
                    .col(timestamp(SeedingOverride::CreatedAt))
                    .col(timestamp(SeedingOverride::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeedingOverride::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SeedingOverride {
    Table,
    Id,
    TrackerId,
    TrackerName,
    MinSeedingTimeSeconds,
    MinRatio,
    CreatedAt,
    UpdatedAt,
}
