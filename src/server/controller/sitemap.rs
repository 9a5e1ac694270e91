use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;

use crate::model::api::ResultDto;

pub static SITEMAP_TAG: &str = "sitemap";

/// Paths registered on the API, collected from the OpenAPI document at startup.
#[derive(Clone, Default)]
pub struct Sitemap {
    paths: Arc<Vec<String>>,
}

impl Sitemap {
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            paths: Arc::new(paths),
        }
    }
}

/// List every API path.
///
/// # Returns
/// - `200 OK` - Paths sorted alphabetically
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Paths served by this API", body = ResultDto<Vec<String>>)
    ),
)]
pub async fn get_sitemap(Extension(sitemap): Extension<Sitemap>) -> impl IntoResponse {
    let mut paths = sitemap.paths.as_ref().clone();
    paths.sort();

    (
        StatusCode::OK,
        Json(ResultDto::new("Here you go all the routes of this API", paths)),
    )
}
