use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::stations::{dtos as stations_dtos, handlers::station_handler};
use crate::features::status::handlers as status_handlers;
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Status
        status_handlers::status,
        // Stations
        station_handler::list_stations,
        station_handler::get_station,
        station_handler::create_station,
        station_handler::update_station,
        station_handler::delete_station,
    ),
    components(
        schemas(
            ErrorResponse,
            status_handlers::StatusResponse,
            stations_dtos::StationFieldsDto,
            stations_dtos::StationResponseDto,
            stations_dtos::UpdateStationDto,
            stations_dtos::DeleteStationDto,
            stations_dtos::StationDataResponse,
            stations_dtos::StationUpdatedResponse,
            stations_dtos::StationDeletedResponse,
        )
    ),
    tags(
        (name = "status", description = "Liveness check"),
        (name = "stations", description = "Base transceiver station records"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "BTS API",
        version = "0.1.0",
        description = "CRUD API for base transceiver station records",
    )
)]
pub struct ApiDoc;

/// Adds the Basic security scheme required by mutating routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Serves the generated document at `/api-docs/openapi.json`
pub fn routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
