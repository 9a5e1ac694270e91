//! Faction factory for creating test faction entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FactionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    leader: String,
    organization_type: Option<String>,
    capital: Option<String>,
    affiliation: String,
}

impl<'a> FactionFactory<'a> {
    /// Creates a new FactionFactory.
    ///
    /// Name, leader and affiliation are unique columns, so each default embeds
    /// the same auto-incremented id.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Faction {}", id),
            leader: format!("Leader {}", id),
            organization_type: None,
            capital: None,
            affiliation: format!("Affiliation {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = leader.into();
        self
    }

    pub fn organization_type(mut self, organization_type: impl Into<String>) -> Self {
        self.organization_type = Some(organization_type.into());
        self
    }

    pub fn capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    pub async fn build(self) -> Result<entity::faction::Model, DbErr> {
        entity::faction::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            leader: ActiveValue::Set(self.leader),
            organization_type: ActiveValue::Set(self.organization_type),
            capital: ActiveValue::Set(self.capital),
            affiliation: ActiveValue::Set(self.affiliation),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_faction(db: &DatabaseConnection) -> Result<entity::faction::Model, DbErr> {
    FactionFactory::new(db).build().await
}
