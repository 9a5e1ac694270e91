use crate::model::star_system::StarSystemDto;

#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub id: i32,
    pub name: String,
    pub galactic_coordinates: Option<String>,
}

impl StarSystem {
    pub fn into_dto(self) -> StarSystemDto {
        StarSystemDto {
            id: self.id,
            name: self.name,
            galactic_coordinates: self.galactic_coordinates,
        }
    }

    pub fn from_entity(entity: entity::star_system::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            galactic_coordinates: entity.galactic_coordinates,
        }
    }
}
