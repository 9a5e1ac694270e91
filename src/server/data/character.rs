//! Character data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    data::favorite::FavoriteRepository,
    model::{character::Character, favorite::Favorite},
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every character with its favorites, ordered by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All characters, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let rows = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .find_with_related(entity::prelude::UserFavorite)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(character, favorites)| {
                Favorite::from_entities(favorites)
                    .map(|favorites| Character::from_entity(character, favorites))
            })
            .collect()
    }

    /// Finds a character by id with its favorites.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let Some(character) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let favorites = FavoriteRepository::new(self.db)
            .get_by_character(id)
            .await?;

        Ok(Some(Character::from_entity(character, favorites)))
    }
}
