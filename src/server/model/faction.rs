use crate::model::faction::FactionDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Faction {
    pub id: i32,
    pub name: String,
    pub leader: String,
    pub organization_type: Option<String>,
    pub capital: Option<String>,
    pub affiliation: String,
}

impl Faction {
    pub fn into_dto(self) -> FactionDto {
        FactionDto {
            id: self.id,
            name: self.name,
            leader: self.leader,
            organization_type: self.organization_type,
            capital: self.capital,
            affiliation: self.affiliation,
        }
    }

    pub fn from_entity(entity: entity::faction::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            leader: entity.leader,
            organization_type: entity.organization_type,
            capital: entity.capital,
            affiliation: entity.affiliation,
        }
    }
}
