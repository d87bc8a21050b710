use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::STATUS_MESSAGE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Report that the API is up
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "API is running", body = StatusResponse),
    ),
    tag = "status"
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_MESSAGE.to_string(),
    })
}
