use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor that maps every decoding failure to a 400.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type: application/json`
/// header; the body is decoded structurally whatever the client declares.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {}", e)))?;

        serde_json::from_slice::<T>(&bytes)
            .map(AppJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid input data: {}", e)))
    }
}
