use serde::{Deserialize, Serialize};

use crate::models::geo::LatLng;
use crate::models::station::Station;

/// `GET /chargers-on-route` body
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteSearchResponse {
    #[serde(default)]
    pub route: Vec<LatLng>,
    #[serde(default)]
    pub chargers: Vec<Station>,
}

/// Everything the route view draws once a calculation fully succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub origin: LatLng,
    pub destination: LatLng,
    /// Driving path from the directions provider
    pub path: Vec<LatLng>,
    pub chargers: Vec<Station>,
}
