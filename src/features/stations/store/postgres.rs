use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::stations::dtos::StationFieldsDto;
use crate::features::stations::models::Station;
use crate::features::stations::store::StationStore;
use crate::shared::constants::STATION_NOT_FOUND;

/// `StationStore` backed by the `tb_ne` table
pub struct PgStationStore {
    pool: PgPool,
}

impl PgStationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for PgStationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStationStore")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

#[async_trait]
impl StationStore for PgStationStore {
    async fn list(&self) -> Result<Vec<Station>> {
        sqlx::query_as::<_, Station>(
            r#"
            SELECT id_bts, kel_des, kab_kota, prov, luas_desa, total_ne, rasio_ne,
                   total_ne_4g, rasio_ne_4g, kec
            FROM tb_ne
            ORDER BY id_bts
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list stations: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Station> {
        sqlx::query_as::<_, Station>(
            r#"
            SELECT id_bts, kel_des, kab_kota, prov, luas_desa, total_ne, rasio_ne,
                   total_ne_4g, rasio_ne_4g, kec
            FROM tb_ne
            WHERE id_bts = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get station {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(STATION_NOT_FOUND.to_string()))
    }

    async fn create(&self, fields: &StationFieldsDto) -> Result<Station> {
        let station = sqlx::query_as::<_, Station>(
            r#"
            INSERT INTO tb_ne (kel_des, kab_kota, prov, luas_desa, total_ne, rasio_ne,
                               total_ne_4g, rasio_ne_4g, kec)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id_bts, kel_des, kab_kota, prov, luas_desa, total_ne, rasio_ne,
                      total_ne_4g, rasio_ne_4g, kec
            "#,
        )
        .bind(&fields.kel_des)
        .bind(&fields.kab_kota)
        .bind(&fields.prov)
        .bind(&fields.luas_desa)
        .bind(&fields.total_ne)
        .bind(&fields.rasio_ne)
        .bind(&fields.total_ne_4g)
        .bind(&fields.rasio_ne_4g)
        .bind(&fields.kec)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create station: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Station created: id_bts={}", station.id_bts);

        Ok(station)
    }

    async fn update(&self, id: i64, fields: &StationFieldsDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE tb_ne
            SET kel_des = $1, kab_kota = $2, prov = $3, luas_desa = $4, total_ne = $5,
                rasio_ne = $6, total_ne_4g = $7, rasio_ne_4g = $8, kec = $9
            WHERE id_bts = $10
            "#,
        )
        .bind(&fields.kel_des)
        .bind(&fields.kab_kota)
        .bind(&fields.prov)
        .bind(&fields.luas_desa)
        .bind(&fields.total_ne)
        .bind(&fields.rasio_ne)
        .bind(&fields.total_ne_4g)
        .bind(&fields.rasio_ne_4g)
        .bind(&fields.kec)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update station {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(STATION_NOT_FOUND.to_string()));
        }

        tracing::info!("Station updated: id_bts={}", id);

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tb_ne WHERE id_bts = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete station {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(STATION_NOT_FOUND.to_string()));
        }

        tracing::info!("Station deleted: id_bts={}", id);

        Ok(())
    }
}
