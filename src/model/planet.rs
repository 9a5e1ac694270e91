use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub favorites: Vec<FavoriteDto>,
    pub population: i64,
    pub terrain: Option<String>,
    pub climate: Option<String>,
}
