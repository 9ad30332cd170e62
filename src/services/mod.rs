pub mod error;
pub mod api_client;
pub mod geocoding_service;
pub mod directions_service;

pub use error::ApiError;
pub use api_client::{ApiClient, StationQuery, StationsApi};
pub use geocoding_service::GeocodingService;
pub use directions_service::DirectionsService;
