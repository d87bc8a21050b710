use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::prelude::*;
use tokio::sync::RwLock;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::stations::dtos::StationFieldsDto;
use crate::features::stations::models::Station;
use crate::features::stations::store::StationStore;
use crate::shared::constants::STATION_NOT_FOUND;

pub fn test_credentials() -> AuthConfig {
    AuthConfig {
        username: "bts-admin".to_string(),
        password: "bts-password".to_string(),
    }
}

/// `Authorization` header value for the given credentials
/// Log output collected by [`capture_logs`]
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

pub fn basic_auth_header(credentials: &AuthConfig) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", BASE64_STANDARD.encode(pair))
}

fn station_from_fields(id_bts: i64, fields: StationFieldsDto) -> Station {
    Station {
        id_bts,
        kel_des: fields.kel_des,
        kab_kota: fields.kab_kota,
        prov: fields.prov,
        luas_desa: fields.luas_desa,
        total_ne: fields.total_ne,
        rasio_ne: fields.rasio_ne,
        total_ne_4g: fields.total_ne_4g,
        rasio_ne_4g: fields.rasio_ne_4g,
        kec: fields.kec,
    }
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Station>,
    last_id: i64,
}

/// `StationStore` kept in memory, with identifiers assigned like a serial column
#[derive(Default)]
pub struct InMemoryStationStore {
    table: RwLock<Table>,
    failure: Option<String>,
}

impl InMemoryStationStore {
    /// A store whose every operation fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            table: RwLock::default(),
            failure: Some(message.to_string()),
        }
    }

    /// Seed a row directly, bypassing the HTTP layer
    pub async fn insert(&self, fields: StationFieldsDto) -> i64 {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, station_from_fields(id, fields));
        id
    }

    pub async fn snapshot(&self) -> Vec<Station> {
        self.table.read().await.rows.values().cloned().collect()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(msg) => Err(AppError::Database(sqlx::Error::Protocol(msg.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StationStore for InMemoryStationStore {
    async fn list(&self) -> Result<Vec<Station>> {
        self.check()?;
        Ok(self.snapshot().await)
    }

    async fn get_by_id(&self, id: i64) -> Result<Station> {
        self.check()?;
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(STATION_NOT_FOUND.to_string()))
    }

    async fn create(&self, fields: &StationFieldsDto) -> Result<Station> {
        self.check()?;
        let id = self.insert(fields.clone()).await;
        Ok(station_from_fields(id, fields.clone()))
    }

    async fn update(&self, id: i64, fields: &StationFieldsDto) -> Result<()> {
        self.check()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = station_from_fields(id, fields.clone());
                Ok(())
            }
            None => Err(AppError::NotFound(STATION_NOT_FOUND.to_string())),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.check()?;
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(STATION_NOT_FOUND.to_string()))
    }
}
