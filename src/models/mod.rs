pub mod geo;
pub mod station;
pub mod marker;
pub mod route;
pub mod loyalty;

pub use geo::{LatLng, Bounds, Viewport};
pub use station::{Station, SubStation, StationStatus, StationsResponse};
pub use marker::Marker;
pub use route::{RouteSearchResponse, RoutePlan};
