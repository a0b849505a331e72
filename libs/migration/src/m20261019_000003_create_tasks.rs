use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_create_regions::Regions;
use crate::m20261019_000002_create_couriers::Couriers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tasks::Id))
                    .col(text(Tasks::Description))
                    .col(integer(Tasks::Cells))
                    .col(integer(Tasks::RegionId))
                    .col(text(Tasks::Address))
                    .col(integer(Tasks::CourierId))
                    .col(
                        timestamp_with_time_zone(Tasks::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Tasks::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_region_id")
                            .from(Tasks::Table, Tasks::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_courier_id")
                            .from(Tasks::Table, Tasks::CourierId)
                            .to(Couriers::Table, Couriers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE tasks ADD CONSTRAINT tasks_cells_positive CHECK (cells > 0)",
            )
            .await?;

        // Capacity checks sum a courier's tasks on every write
        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_courier_id")
                    .table(Tasks::Table)
                    .col(Tasks::CourierId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_region_id")
                    .table(Tasks::Table)
                    .col(Tasks::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Description,
    Cells,
    RegionId,
    Address,
    CourierId,
    CreatedAt,
    UpdatedAt,
}
