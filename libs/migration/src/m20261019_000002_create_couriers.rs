use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_create_regions::Regions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Couriers::Table)
                    .if_not_exists()
                    .col(pk_auto(Couriers::Id))
                    .col(string_len(Couriers::FullName, 255))
                    .col(integer(Couriers::RegionId))
                    .col(integer(Couriers::MaxCells))
                    .col(
                        timestamp_with_time_zone(Couriers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Couriers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_couriers_region_id")
                            .from(Couriers::Table, Couriers::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE couriers ADD CONSTRAINT couriers_max_cells_positive CHECK (max_cells > 0)",
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_couriers_region_id")
                    .table(Couriers::Table)
                    .col(Couriers::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Couriers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Couriers {
    Table,
    Id,
    FullName,
    RegionId,
    MaxCells,
    CreatedAt,
    UpdatedAt,
}
