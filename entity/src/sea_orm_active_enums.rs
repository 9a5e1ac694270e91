use sea_orm::entity::prelude::*;

/// Kind of target a favorite points at.
///
/// Stored as the strings `planet` and `people`, matching the route segments
/// used to add and remove favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "people")]
    People,
}
