use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimal projection of a favorite.
///
/// Carries no target identity; callers look the planet or character up
/// separately.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub name_of_favorite: String,
}
