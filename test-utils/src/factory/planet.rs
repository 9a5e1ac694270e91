//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    population: i64,
    terrain: Option<String>,
    climate: Option<String>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"`
    /// - population: `1000`
    /// - terrain: `Some("desert")`
    /// - climate: `Some("arid")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            population: 1000,
            terrain: Some("desert".to_string()),
            climate: Some("arid".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    pub fn terrain(mut self, terrain: Option<String>) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn climate(mut self, climate: Option<String>) -> Self {
        self.climate = climate;
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            population: ActiveValue::Set(self.population),
            terrain: ActiveValue::Set(self.terrain),
            climate: ActiveValue::Set(self.climate),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
