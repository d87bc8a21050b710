use sqlx::FromRow;

use crate::features::stations::dtos::{StationFieldsDto, StationResponseDto};

/// Database model for a row of `tb_ne`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Station {
    pub id_bts: i64,
    pub kel_des: String,
    pub kab_kota: String,
    pub prov: String,
    pub luas_desa: String,
    pub total_ne: String,
    pub rasio_ne: String,
    pub total_ne_4g: String,
    pub rasio_ne_4g: String,
    pub kec: String,
}

impl From<Station> for StationResponseDto {
    fn from(s: Station) -> Self {
        Self {
            id: s.id_bts,
            fields: StationFieldsDto {
                kel_des: s.kel_des,
                kab_kota: s.kab_kota,
                prov: s.prov,
                luas_desa: s.luas_desa,
                total_ne: s.total_ne,
                rasio_ne: s.rasio_ne,
                total_ne_4g: s.total_ne_4g,
                rasio_ne_4g: s.rasio_ne_4g,
                kec: s.kec,
            },
        }
    }
}
