use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::stations::dtos::{
    DeleteStationDto, GetStationQuery, StationDataResponse, StationDeletedResponse,
    StationFieldsDto, StationResponseDto, StationUpdatedResponse, UpdateStationDto,
};
use crate::features::stations::store::StationStore;

/// List all stations
#[utoipa::path(
    get,
    path = "/dataBTS",
    responses(
        (status = 200, description = "All stations", body = Vec<StationResponseDto>),
        (status = 500, description = "Store failure")
    ),
    tag = "stations"
)]
pub async fn list_stations(
    State(store): State<Arc<dyn StationStore>>,
) -> Result<Json<Vec<StationResponseDto>>> {
    let stations = store.list().await?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

/// Get a station by its identifier
#[utoipa::path(
    get,
    path = "/getBTSByID",
    params(GetStationQuery),
    responses(
        (status = 200, description = "Station found", body = StationDataResponse),
        (status = 400, description = "Missing or non-integer id"),
        (status = 404, description = "Station not found")
    ),
    tag = "stations"
)]
pub async fn get_station(
    State(store): State<Arc<dyn StationStore>>,
    Query(query): Query<GetStationQuery>,
) -> Result<Json<StationDataResponse>> {
    let id = parse_id(query.id.as_deref())?;
    let station = store.get_by_id(id).await?;
    Ok(Json(StationDataResponse::success(station.into())))
}

/// Create a station
///
/// Returns the submitted fields together with the identifier the store assigned.
#[utoipa::path(
    post,
    path = "/createBTS",
    request_body = StationFieldsDto,
    responses(
        (status = 200, description = "Station created", body = StationDataResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or invalid credentials")
    ),
    tag = "stations",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn create_station(
    State(store): State<Arc<dyn StationStore>>,
    AppJson(dto): AppJson<StationFieldsDto>,
) -> Result<Json<StationDataResponse>> {
    let station = store.create(&dto).await?;
    Ok(Json(StationDataResponse::success(station.into())))
}

/// Overwrite every field of a station
#[utoipa::path(
    put,
    path = "/updateBTS",
    request_body = UpdateStationDto,
    responses(
        (status = 200, description = "Station updated", body = StationUpdatedResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Station not found")
    ),
    tag = "stations",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn update_station(
    State(store): State<Arc<dyn StationStore>>,
    AppJson(dto): AppJson<UpdateStationDto>,
) -> Result<Json<StationUpdatedResponse>> {
    store.update(dto.id_bts, &dto.fields).await?;
    Ok(Json(StationUpdatedResponse::success(dto)))
}

/// Delete a station
#[utoipa::path(
    post,
    path = "/deleteBTS",
    request_body = DeleteStationDto,
    responses(
        (status = 200, description = "Station deleted", body = StationDeletedResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Missing or invalid credentials"),
        (status = 404, description = "Station not found")
    ),
    tag = "stations",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn delete_station(
    State(store): State<Arc<dyn StationStore>>,
    AppJson(dto): AppJson<DeleteStationDto>,
) -> Result<Json<StationDeletedResponse>> {
    store.delete(dto.id_bts).await?;
    Ok(Json(StationDeletedResponse::success(dto.id_bts)))
}

fn parse_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("ID is required".to_string()))?;

    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))
}
