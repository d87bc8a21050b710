use axum::{routing::any, Router};

use crate::features::status::handlers;

pub fn routes() -> Router {
    Router::new().route("/status", any(handlers::status))
}
