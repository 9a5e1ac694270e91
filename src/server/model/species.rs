use crate::model::species::SpeciesDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub lifespan: Option<i32>,
    pub language: String,
}

impl Species {
    pub fn into_dto(self) -> SpeciesDto {
        SpeciesDto {
            id: self.id,
            name: self.name,
            classification: self.classification,
            lifespan: self.lifespan,
            language: self.language,
        }
    }

    pub fn from_entity(entity: entity::species::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            classification: entity.classification,
            lifespan: entity.lifespan,
            language: entity.language,
        }
    }
}
