//! Planet domain models.

use crate::{model::planet::PlanetDto, server::model::favorite::Favorite};

/// Planet with the favorites that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub favorites: Vec<Favorite>,
}

impl Planet {
    /// Converts the planet to a DTO, inlining favorites as id and label only so the
    /// output never expands back into the owning users.
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            favorites: self.favorites.into_iter().map(Favorite::into_dto).collect(),
            population: self.population,
            terrain: self.terrain,
            climate: self.climate,
        }
    }

    pub fn from_entity(entity: entity::planet::Model, favorites: Vec<Favorite>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            population: entity.population,
            terrain: entity.terrain,
            climate: entity.climate,
            favorites,
        }
    }
}
