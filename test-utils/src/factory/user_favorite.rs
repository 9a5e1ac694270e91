//! Favorite factory for inserting favorite rows directly.
//!
//! Bypasses the favorite service so tests can arrange pre-existing favorites,
//! including duplicates the service itself would reject.

use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite of kind `planet` for the given user and planet.
///
/// # Returns
/// - `Ok(entity::user_favorite::Model)` - Created favorite row
/// - `Err(DbErr)` - Database error, including unique and foreign key violations
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::user_favorite::Model, DbErr> {
    entity::user_favorite::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set(FavoriteKind::Planet),
        planet_id: ActiveValue::Set(Some(planet_id)),
        character_id: ActiveValue::Set(None),
        name_of_favorite: ActiveValue::Set("planet".to_string()),
    }
    .insert(db)
    .await
}

/// Inserts a favorite of kind `people` for the given user and character.
///
/// # Returns
/// - `Ok(entity::user_favorite::Model)` - Created favorite row
/// - `Err(DbErr)` - Database error, including unique and foreign key violations
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::user_favorite::Model, DbErr> {
    entity::user_favorite::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set(FavoriteKind::People),
        planet_id: ActiveValue::Set(None),
        character_id: ActiveValue::Set(Some(character_id)),
        name_of_favorite: ActiveValue::Set("people".to_string()),
    }
    .insert(db)
    .await
}
