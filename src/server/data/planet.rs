//! Planet data repository.
//!
//! Planets are returned with the favorites that reference them so the serialized form
//! can list its favorites without expanding back into users.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    data::favorite::FavoriteRepository,
    model::{favorite::Favorite, planet::Planet},
};

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every planet with its favorites, ordered by ascending id.
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - All planets, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let rows = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .find_with_related(entity::prelude::UserFavorite)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(planet, favorites)| {
                Favorite::from_entities(favorites)
                    .map(|favorites| Planet::from_entity(planet, favorites))
            })
            .collect()
    }

    /// Finds a planet by id with its favorites.
    ///
    /// Favorites are loaded through the reverse query on `FavoriteRepository`.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let Some(planet) = entity::prelude::Planet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let favorites = FavoriteRepository::new(self.db).get_by_planet(id).await?;

        Ok(Some(Planet::from_entity(planet, favorites)))
    }
}
