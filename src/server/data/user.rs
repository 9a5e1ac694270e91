//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records together with the
//! favorites they own. Users are created outside this application, so the repository is
//! read-only.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::{favorite::Favorite, user::User};

/// Repository providing database reads for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user with their favorites, ordered by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, empty if none exist
    /// - `Err(DbErr)` - Database error during query or an inconsistent favorite row
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let rows = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .find_with_related(entity::prelude::UserFavorite)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(user, favorites)| {
                Favorite::from_entities(favorites).map(|favorites| User::from_entity(user, favorites))
            })
            .collect()
    }

    /// Finds a user by id with their favorites.
    ///
    /// # Arguments
    /// - `id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let row = entity::prelude::User::find_by_id(id)
            .find_with_related(entity::prelude::UserFavorite)
            .all(self.db)
            .await?
            .into_iter()
            .next();

        match row {
            Some((user, favorites)) => Ok(Some(User::from_entity(
                user,
                Favorite::from_entities(favorites)?,
            ))),
            None => Ok(None),
        }
    }

    /// Checks whether a user with the given id exists.
    ///
    /// Used by the auth guard, which only needs existence and not the favorites.
    ///
    /// # Arguments
    /// - `id` - Primary key of the user
    ///
    /// # Returns
    /// - `Ok(true)` - User exists
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.is_some())
    }
}
