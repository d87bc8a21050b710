pub mod stations;
pub mod status;
