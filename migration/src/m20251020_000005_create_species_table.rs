use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string_len_uniq(Species::Name, 100))
                    .col(string_len_uniq(Species::Classification, 100))
                    .col(integer_null(Species::Lifespan))
                    .col(string_len(Species::Language, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Species {
    Table,
    Id,
    Name,
    Classification,
    Lifespan,
    Language,
}
