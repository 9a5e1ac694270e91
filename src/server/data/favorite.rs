//! Favorite data repository.
//!
//! This module provides the `FavoriteRepository` for reading and writing the join rows
//! between users and their favorite planets or characters. The repository is generic
//! over `ConnectionTrait` so the favorite service can run an existence check and an
//! insert on the same transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{Favorite, FavoriteTarget};

/// Repository providing database operations for user favorites.
///
/// Holds a reference to either a `DatabaseConnection` or a `DatabaseTransaction`.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all favorites owned by a user, ordered by id.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if they have none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::UserFavorite::find()
            .filter(entity::user_favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_favorite::Column::Id)
            .all(self.db)
            .await?;

        Favorite::from_entities(entities)
    }

    /// Gets all favorites referencing a planet, ordered by id.
    pub async fn get_by_planet(&self, planet_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::UserFavorite::find()
            .filter(entity::user_favorite::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::user_favorite::Column::Id)
            .all(self.db)
            .await?;

        Favorite::from_entities(entities)
    }

    /// Gets all favorites referencing a character, ordered by id.
    pub async fn get_by_character(&self, character_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::UserFavorite::find()
            .filter(entity::user_favorite::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::user_favorite::Column::Id)
            .all(self.db)
            .await?;

        Favorite::from_entities(entities)
    }

    /// Finds the favorite a user holds for a specific planet or character.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorite
    /// - `target` - Planet or character the favorite points at
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The user already favorited this target
    /// - `Ok(None)` - No such favorite
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::UserFavorite::find()
            .filter(Self::owned_target(user_id, target))
            .one(self.db)
            .await?;

        entity.map(Favorite::from_entity).transpose()
    }

    /// Checks whether the planet or character a favorite would point at exists.
    ///
    /// # Arguments
    /// - `target` - Planet or character to look up by primary key
    ///
    /// # Returns
    /// - `Ok(true)` - Target row exists
    /// - `Ok(false)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let exists = match target {
            FavoriteTarget::Planet(id) => entity::prelude::Planet::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
            FavoriteTarget::Character(id) => entity::prelude::Character::find_by_id(id)
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(exists)
    }

    /// Inserts a favorite linking a user to a planet or character.
    ///
    /// The kind column and `name_of_favorite` are derived from the target. The unique
    /// indexes on (user_id, planet_id) and (user_id, character_id) reject duplicates;
    /// callers detect that case with `DbErr::sql_err()`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new favorite
    /// - `target` - Planet or character to favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error, including unique and foreign key violations
    pub async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, DbErr> {
        let (planet_id, character_id) = match target {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Character(id) => (None, Some(id)),
        };

        let entity = entity::user_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(target.kind()),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            name_of_favorite: ActiveValue::Set(target.name_of_favorite().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(entity)
    }

    /// Deletes the favorite a user holds for a planet or character.
    ///
    /// Runs as a single conditional delete so concurrent removals cannot both succeed.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorite
    /// - `target` - Planet or character the favorite points at
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, `0` if no such favorite existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<u64, DbErr> {
        let result = entity::prelude::UserFavorite::delete_many()
            .filter(Self::owned_target(user_id, target))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Condition matching the favorite row of `user_id` for `target`.
    fn owned_target(user_id: i32, target: FavoriteTarget) -> Condition {
        let target_column = match target {
            FavoriteTarget::Planet(id) => entity::user_favorite::Column::PlanetId.eq(id),
            FavoriteTarget::Character(id) => entity::user_favorite::Column::CharacterId.eq(id),
        };

        Condition::all()
            .add(entity::user_favorite::Column::UserId.eq(user_id))
            .add(target_column)
    }
}
