use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(pk_auto(Regions::Id))
                    .col(string_len(Regions::Name, 255))
                    .col(
                        timestamp_with_time_zone(Regions::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_regions_name")
                    .table(Regions::Table)
                    .col(Regions::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Regions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Regions {
    Table,
    Id,
    Name,
    CreatedAt,
}
