//! Species factory for creating test species entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    classification: String,
    lifespan: Option<i32>,
    language: String,
}

impl<'a> SpeciesFactory<'a> {
    /// Creates a new SpeciesFactory with unique name and classification.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Species {}", id),
            classification: format!("Classification {}", id),
            lifespan: None,
            language: "Galactic Basic".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = classification.into();
        self
    }

    pub fn lifespan(mut self, lifespan: i32) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        entity::species::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            classification: ActiveValue::Set(self.classification),
            lifespan: ActiveValue::Set(self.lifespan),
            language: ActiveValue::Set(self.language),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_species(db: &DatabaseConnection) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db).build().await
}
