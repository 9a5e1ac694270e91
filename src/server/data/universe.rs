//! Repositories for the reference tables that carry no favorites.
//!
//! Star systems, factions and species are read-only lookups with the same two queries
//! each: everything ordered by id, or a single row by primary key.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::{faction::Faction, species::Species, star_system::StarSystem};

pub struct StarSystemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarSystemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every star system ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<StarSystem>, DbErr> {
        let entities = entity::prelude::StarSystem::find()
            .order_by_asc(entity::star_system::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StarSystem::from_entity).collect())
    }

    /// Finds a star system by id, `None` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<StarSystem>, DbErr> {
        let entity = entity::prelude::StarSystem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(StarSystem::from_entity))
    }
}

pub struct FactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every faction ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<Faction>, DbErr> {
        let entities = entity::prelude::Faction::find()
            .order_by_asc(entity::faction::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Faction::from_entity).collect())
    }

    /// Finds a faction by id, `None` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Faction>, DbErr> {
        let entity = entity::prelude::Faction::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Faction::from_entity))
    }
}

pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every species ordered by ascending id.
    pub async fn get_all(&self) -> Result<Vec<Species>, DbErr> {
        let entities = entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Species::from_entity).collect())
    }

    /// Finds a species by id, `None` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Species>, DbErr> {
        let entity = entity::prelude::Species::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Species::from_entity))
    }
}
