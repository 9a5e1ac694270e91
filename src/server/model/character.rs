//! Character domain models.

use chrono::NaiveDate;

use crate::{model::character::CharacterDto, server::model::favorite::Favorite};

/// Character with the favorites that reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub favorites: Vec<Favorite>,
}

impl Character {
    /// Converts the character to a DTO with favorites in their minimal form.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
            birthdate: self.birthdate,
            gender: self.gender,
            occupation: self.occupation,
            favorites: self.favorites.into_iter().map(Favorite::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::character::Model, favorites: Vec<Favorite>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            weight: entity.weight,
            birthdate: entity.birthdate,
            gender: entity.gender,
            occupation: entity.occupation,
            favorites,
        }
    }
}
