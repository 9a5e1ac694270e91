use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarSystems::Table)
                    .if_not_exists()
                    .col(pk_auto(StarSystems::Id))
                    .col(string_len_uniq(StarSystems::Name, 100))
                    .col(string_len_null(StarSystems::GalacticCoordinates, 50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StarSystems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StarSystems {
    Table,
    Id,
    Name,
    GalacticCoordinates,
}
