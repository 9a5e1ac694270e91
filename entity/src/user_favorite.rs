use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::FavoriteKind;

/// A user's favorite planet or character.
///
/// Exactly one of `planet_id` and `character_id` is set, matching `kind`.
/// The composite unique keys allow at most one favorite per (user, planet)
/// and per (user, character); NULL targets never collide.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(
        unique_key = "user_planet_favorite_idx",
        unique_key = "user_character_favorite_idx"
    )]
    pub user_id: i32,
    pub kind: FavoriteKind,
    #[sea_orm(unique_key = "user_planet_favorite_idx")]
    pub planet_id: Option<i32>,
    #[sea_orm(unique_key = "user_character_favorite_idx")]
    pub character_id: Option<i32>,
    pub name_of_favorite: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Character,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
