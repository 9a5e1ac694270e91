//! Star system factory for creating test star system entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StarSystemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    galactic_coordinates: Option<String>,
}

impl<'a> StarSystemFactory<'a> {
    /// Creates a new StarSystemFactory with name `"System {id}"` and no coordinates.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("System {}", id),
            galactic_coordinates: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn galactic_coordinates(mut self, coordinates: impl Into<String>) -> Self {
        self.galactic_coordinates = Some(coordinates.into());
        self
    }

    pub async fn build(self) -> Result<entity::star_system::Model, DbErr> {
        entity::star_system::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            galactic_coordinates: ActiveValue::Set(self.galactic_coordinates),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_star_system(
    db: &DatabaseConnection,
) -> Result<entity::star_system::Model, DbErr> {
    StarSystemFactory::new(db).build().await
}
