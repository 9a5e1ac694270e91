use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{controller::extract::IdPath, error::AppError, state::AppState};


/// Reads a response body as JSON.
async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
