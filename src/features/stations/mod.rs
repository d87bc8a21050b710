//! Base transceiver station (BTS) records.
//!
//! CRUD over the single `tb_ne` table.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | any | `/dataBTS` | non-GET only | List all stations |
//! | any | `/getBTSByID?id=` | non-GET only | Get one station |
//! | any but GET | `/createBTS` | Yes | Create a station |
//! | any but GET | `/updateBTS` | Yes | Overwrite a station |
//! | any but GET | `/deleteBTS` | Yes | Delete a station |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;

pub use store::{PgStationStore, StationStore};
