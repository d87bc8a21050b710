pub mod station_dto;

pub use station_dto::{
    DeleteStationDto, GetStationQuery, StationDataResponse, StationDeletedResponse,
    StationFieldsDto, StationResponseDto, StationUpdatedResponse, UpdateStationDto,
};
