use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;
use super::m20251020_000004_create_planets_table::Planets;
use super::m20251020_000006_create_characters_table::Characters;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavorites::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFavorites::Id))
                    .col(integer(UserFavorites::UserId))
                    .col(string_len(UserFavorites::Kind, 16))
                    .col(integer_null(UserFavorites::PlanetId))
                    .col(integer_null(UserFavorites::CharacterId))
                    .col(string_len(UserFavorites::NameOfFavorite, 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_user_id")
                            .from(UserFavorites::Table, UserFavorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_planet_id")
                            .from(UserFavorites::Table, UserFavorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorites_character_id")
                            .from(UserFavorites::Table, UserFavorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, planet) and per (user, character)
        manager
            .create_index(
                Index::create()
                    .name("user_planet_favorite_idx")
                    .table(UserFavorites::Table)
                    .col(UserFavorites::UserId)
                    .col(UserFavorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("user_character_favorite_idx")
                    .table(UserFavorites::Table)
                    .col(UserFavorites::UserId)
                    .col(UserFavorites::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("user_character_favorite_idx")
                    .table(UserFavorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("user_planet_favorite_idx")
                    .table(UserFavorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserFavorites {
    Table,
    Id,
    UserId,
    Kind,
    PlanetId,
    CharacterId,
    NameOfFavorite,
}
