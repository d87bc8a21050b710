use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{any, on, MethodFilter},
    Router,
};

use crate::core::config::AuthConfig;
use crate::core::middleware;
use crate::features::stations::handlers;
use crate::features::stations::store::StationStore;

/// Every method except GET, which the auth stage lets through unchecked
const MUTATING_METHODS: MethodFilter = MethodFilter::POST
    .or(MethodFilter::PUT)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::DELETE)
    .or(MethodFilter::HEAD)
    .or(MethodFilter::OPTIONS)
    .or(MethodFilter::TRACE)
    .or(MethodFilter::CONNECT);

/// Create routes for the stations feature
///
/// Every request runs through the logging stage, including the 405 answered
/// for GET on a mutating route. Matched routes then pass the Basic auth stage.
/// Read routes answer any method; mutating routes answer any method but GET.
pub fn routes(store: Arc<dyn StationStore>, credentials: Arc<AuthConfig>) -> Router {
    Router::new()
        .route("/dataBTS", any(handlers::list_stations))
        .route("/getBTSByID", any(handlers::get_station))
        .route("/createBTS", on(MUTATING_METHODS, handlers::create_station))
        .route("/updateBTS", on(MUTATING_METHODS, handlers::update_station))
        .route("/deleteBTS", on(MUTATING_METHODS, handlers::delete_station))
        .with_state(store)
        .route_layer(from_fn_with_state(credentials, middleware::basic_auth))
        .layer(from_fn(middleware::log_request))
}
