use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub lifespan: Option<i32>,
    pub language: String,
}
