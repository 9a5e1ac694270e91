//! User domain models.

use crate::{model::user::UserDto, server::model::favorite::Favorite};

/// Application user with the favorites they own.
///
/// The password column never leaves the repository: this model has no field for it,
/// so no DTO built from it can expose one.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub favorites: Vec<Favorite>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Favorites are inlined in their minimal form.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_active: self.is_active,
            favorites: self.favorites.into_iter().map(Favorite::into_dto).collect(),
        }
    }

    /// Converts an entity model and its favorites to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row from the database
    /// - `favorites` - Favorites owned by the user, already converted
    pub fn from_entity(entity: entity::user::Model, favorites: Vec<Favorite>) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_active: entity.is_active,
            favorites,
        }
    }
}
