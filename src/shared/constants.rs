/// `message` value of every successful station response
pub const SUCCESS_MESSAGE: &str = "success";

/// Body of the `/status` endpoint
pub const STATUS_MESSAGE: &str = "API is running";

/// Returned when a lookup, update or delete matches no station
pub const STATION_NOT_FOUND: &str = "No BTS found with that ID";
