use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub birthdate: Option<NaiveDate>, // Format: "YYYY-MM-DD"
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub favorites: Vec<FavoriteDto>,
}
