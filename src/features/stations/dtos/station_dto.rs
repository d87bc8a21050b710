use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::SUCCESS_MESSAGE;

/// The nine free-text attributes of a station.
///
/// Fields absent from a request body, or sent as `null`, decode as empty
/// strings; only the JSON structure and value types are checked. Keys are
/// accepted in snake case or upper snake case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StationFieldsDto {
    /// Village (kelurahan/desa)
    #[serde(alias = "KEL_DES", deserialize_with = "null_as_empty")]
    pub kel_des: String,
    /// Regency or city
    #[serde(alias = "KAB_KOTA", deserialize_with = "null_as_empty")]
    pub kab_kota: String,
    /// Province
    #[serde(alias = "PROV", deserialize_with = "null_as_empty")]
    pub prov: String,
    /// Village area
    #[serde(alias = "LUAS_DESA", deserialize_with = "null_as_empty")]
    pub luas_desa: String,
    /// Total network elements
    #[serde(alias = "TOTAL_NE", deserialize_with = "null_as_empty")]
    pub total_ne: String,
    /// Network element ratio
    #[serde(alias = "RASIO_NE", deserialize_with = "null_as_empty")]
    pub rasio_ne: String,
    /// Total 4G network elements
    #[serde(alias = "TOTAL_NE_4G", deserialize_with = "null_as_empty")]
    pub total_ne_4g: String,
    /// 4G network element ratio
    #[serde(alias = "RASIO_NE_4G", deserialize_with = "null_as_empty")]
    pub rasio_ne_4g: String,
    /// District (kecamatan)
    #[serde(alias = "KEC", deserialize_with = "null_as_empty")]
    pub kec: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `/updateBTS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateStationDto {
    #[serde(alias = "ID_BTS")]
    pub id_bts: i64,
    #[serde(flatten)]
    pub fields: StationFieldsDto,
}

/// Request body for `/deleteBTS`; any station fields sent alongside are ignored
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeleteStationDto {
    #[serde(alias = "ID_BTS")]
    pub id_bts: i64,
}

/// Query params for `/getBTSByID`
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetStationQuery {
    /// Station identifier (integer)
    pub id: Option<String>,
}

/// A station as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StationResponseDto {
    pub id: i64,
    #[serde(flatten)]
    pub fields: StationFieldsDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationDataResponse {
    pub message: String,
    pub data: StationResponseDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationUpdatedResponse {
    pub message: String,
    pub updated_data: UpdateStationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StationDeletedResponse {
    pub message: String,
    pub deleted_id: i64,
}

impl StationDataResponse {
    pub fn success(data: StationResponseDto) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

impl StationUpdatedResponse {
    pub fn success(updated_data: UpdateStationDto) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            updated_data,
        }
    }
}

impl StationDeletedResponse {
    pub fn success(deleted_id: i64) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            deleted_id,
        }
    }
}
