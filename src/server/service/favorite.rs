//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService`, which manages the favorites of a given
//! user. The current user is always passed in explicitly by the caller.
//!
//! Adds run their existence checks and insert on a single transaction, and the unique
//! indexes on `user_favorites` remain the final arbiter: an insert rejected for a unique
//! violation is reported as `FavoriteError::AlreadyExists`. Removals are one conditional
//! delete, so two concurrent removals of the same favorite cannot both succeed.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::favorite::FavoriteRepository,
    error::{favorite::FavoriteError, AppError},
    model::favorite::{Favorite, FavoriteTarget},
};

/// Service providing favorite management for users.
pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every favorite owned by a user, ordered by id.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorites
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if none
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let favorites = FavoriteRepository::new(self.db).get_by_user(user_id).await?;
        Ok(favorites)
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new favorite
    /// - `planet_id` - Planet to favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite of kind `planet`
    /// - `Err(AppError::FavoriteErr(PlanetNotFound))` - Planet does not exist
    /// - `Err(AppError::FavoriteErr(AlreadyExists))` - User already favorited the planet
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Favorite, AppError> {
        self.add_favorite(user_id, FavoriteTarget::Planet(planet_id))
            .await
    }

    /// Adds a character to a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new favorite
    /// - `character_id` - Character to favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite of kind `people`
    /// - `Err(AppError::FavoriteErr(CharacterNotFound))` - Character does not exist
    /// - `Err(AppError::FavoriteErr(AlreadyExists))` - User already favorited the character
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Favorite, AppError> {
        self.add_favorite(user_id, FavoriteTarget::Character(character_id))
            .await
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::FavoriteErr(NotFound))` - User has not favorited the planet
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<(), AppError> {
        self.remove_favorite(user_id, FavoriteTarget::Planet(planet_id))
            .await
    }

    /// Removes a character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::FavoriteErr(NotFound))` - User has not favorited the character
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), AppError> {
        self.remove_favorite(user_id, FavoriteTarget::Character(character_id))
            .await
    }

    async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, AppError> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        if !favorite_repo.target_exists(target).await? {
            let err = match target {
                FavoriteTarget::Planet(id) => FavoriteError::PlanetNotFound(id),
                FavoriteTarget::Character(id) => FavoriteError::CharacterNotFound(id),
            };
            return Err(err.into());
        }

        if favorite_repo.find(user_id, target).await?.is_some() {
            return Err(FavoriteError::AlreadyExists { user_id, target }.into());
        }

        // A concurrent add can still win the race between the lookup and the insert.
        let favorite = match favorite_repo.create(user_id, target).await {
            Ok(favorite) => favorite,
            Err(err) if is_unique_violation(&err) => {
                return Err(FavoriteError::AlreadyExists { user_id, target }.into())
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!("User {} added favorite {}", user_id, target);

        Ok(favorite)
    }

    async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), AppError> {
        let deleted = FavoriteRepository::new(self.db)
            .delete(user_id, target)
            .await?;

        if deleted == 0 {
            return Err(FavoriteError::NotFound { user_id, target }.into());
        }

        tracing::info!("User {} removed favorite {}", user_id, target);

        Ok(())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
