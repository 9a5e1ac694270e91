use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Factions::Table)
                    .if_not_exists()
                    .col(pk_auto(Factions::Id))
                    .col(string_uniq(Factions::Name))
                    .col(string_uniq(Factions::Leader))
                    .col(string_null(Factions::OrganizationType))
                    .col(string_null(Factions::Capital))
                    .col(string_uniq(Factions::Affiliation))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Factions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Factions {
    Table,
    Id,
    Name,
    Leader,
    OrganizationType,
    Capital,
    Affiliation,
}
