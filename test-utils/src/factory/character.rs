//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Optional attributes default to `None` so tests only set what they assert on.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    height: Option<i32>,
    weight: Option<i32>,
    birthdate: Option<NaiveDate>,
    gender: Option<String>,
    occupation: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with name `"Character {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            height: None,
            weight: None,
            birthdate: None,
            gender: None,
            occupation: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(self.height),
            weight: ActiveValue::Set(self.weight),
            birthdate: ActiveValue::Set(self.birthdate),
            gender: ActiveValue::Set(self.gender),
            occupation: ActiveValue::Set(self.occupation),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
