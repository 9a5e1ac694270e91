use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StarSystemDto {
    pub id: i32,
    pub name: String,
    pub galactic_coordinates: Option<String>,
}
