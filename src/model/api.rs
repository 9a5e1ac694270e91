use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Envelope for successful reads: a human-readable message plus the payload.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ResultDto<T> {
    pub msg: String,
    pub result: T,
}

impl<T> ResultDto<T> {
    pub fn new(msg: impl Into<String>, result: T) -> Self {
        Self {
            msg: msg.into(),
            result,
        }
    }
}

/// Body returned by mutations that have no payload.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
