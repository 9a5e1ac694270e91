use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FactionDto {
    pub id: i32,
    pub name: String,
    pub leader: String,
    pub organization_type: Option<String>,
    pub capital: Option<String>,
    pub affiliation: String,
}
