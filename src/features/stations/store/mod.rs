//! Record store adapter for station rows.
//!
//! Handlers only see the [`StationStore`] trait; the production implementation
//! talks to PostgreSQL through a shared `PgPool`.

pub mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::stations::dtos::StationFieldsDto;
use crate::features::stations::models::Station;

pub use postgres::PgStationStore;

#[async_trait]
pub trait StationStore: Send + Sync {
    /// All stations, in identifier order
    async fn list(&self) -> Result<Vec<Station>>;

    /// Exactly one station, or `AppError::NotFound`
    async fn get_by_id(&self, id: i64) -> Result<Station>;

    /// Insert a new row and return it with its generated identifier
    async fn create(&self, fields: &StationFieldsDto) -> Result<Station>;

    /// Overwrite every field of an existing row; `AppError::NotFound` when no row matched
    async fn update(&self, id: i64, fields: &StationFieldsDto) -> Result<()>;

    /// Remove a row; `AppError::NotFound` when no row matched
    async fn delete(&self, id: i64) -> Result<()>;
}
