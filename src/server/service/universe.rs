//! Universe service for the reference tables.
//!
//! Star systems, factions and species have no business rules of their own; this service
//! only routes lookups to the matching repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::universe::{FactionRepository, SpeciesRepository, StarSystemRepository},
    error::AppError,
    model::{faction::Faction, species::Species, star_system::StarSystem},
};

pub struct UniverseService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UniverseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_star_systems(&self) -> Result<Vec<StarSystem>, AppError> {
        Ok(StarSystemRepository::new(self.db).get_all().await?)
    }

    pub async fn get_star_system(&self, id: i32) -> Result<Option<StarSystem>, AppError> {
        Ok(StarSystemRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all_factions(&self) -> Result<Vec<Faction>, AppError> {
        Ok(FactionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_faction(&self, id: i32) -> Result<Option<Faction>, AppError> {
        Ok(FactionRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_all_species(&self) -> Result<Vec<Species>, AppError> {
        Ok(SpeciesRepository::new(self.db).get_all().await?)
    }

    pub async fn get_species(&self, id: i32) -> Result<Option<Species>, AppError> {
        Ok(SpeciesRepository::new(self.db).get_by_id(id).await?)
    }
}
