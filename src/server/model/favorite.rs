//! Favorite domain models.
//!
//! A favorite links one user to exactly one planet or character. The entity stores the
//! target as a kind column plus two nullable foreign keys; the domain model folds those
//! into a single `FavoriteTarget` so an inconsistent combination cannot be represented.

use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::DbErr;
use std::fmt;

use crate::model::favorite::FavoriteDto;

/// The planet or character a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    /// Storage kind of this target.
    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Character(_) => FavoriteKind::People,
        }
    }

    /// Primary key of the targeted planet or character.
    pub fn id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => *id,
        }
    }

    /// Value stored in `name_of_favorite` for new favorites of this kind.
    pub fn name_of_favorite(&self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "people",
        }
    }

    /// Noun used in client-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet(_) => "planet",
            Self::Character(_) => "person",
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet(id) => write!(f, "planet {}", id),
            Self::Character(id) => write!(f, "character {}", id),
        }
    }
}

/// A user's favorite planet or character.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    /// Owner of the favorite.
    pub user_id: i32,
    pub target: FavoriteTarget,
    /// Redundant label stored alongside the target, `planet` or `people`.
    pub name_of_favorite: String,
}

impl Favorite {
    /// Converts the favorite to its minimal DTO (id and label only).
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            name_of_favorite: self.name_of_favorite,
        }
    }

    /// Converts an entity model to a favorite domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The favorite row from the database
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Row references the target its kind names
    /// - `Err(DbErr::Custom)` - Row's kind column has no matching foreign key
    pub fn from_entity(entity: entity::user_favorite::Model) -> Result<Self, DbErr> {
        let target = match (entity.kind, entity.planet_id, entity.character_id) {
            (FavoriteKind::Planet, Some(planet_id), _) => FavoriteTarget::Planet(planet_id),
            (FavoriteKind::People, _, Some(character_id)) => {
                FavoriteTarget::Character(character_id)
            }
            (kind, _, _) => {
                return Err(DbErr::Custom(format!(
                    "Favorite {} of kind {:?} is missing its target reference",
                    entity.id, kind
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
            name_of_favorite: entity.name_of_favorite,
        })
    }

    /// Converts a batch of favorite rows ordered by id, failing on the first
    /// inconsistent row.
    pub fn from_entities(entities: Vec<entity::user_favorite::Model>) -> Result<Vec<Self>, DbErr> {
        let mut favorites = entities
            .into_iter()
            .map(Self::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        favorites.sort_by_key(|favorite| favorite.id);

        Ok(favorites)
    }
}
