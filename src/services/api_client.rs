// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here, just requests against the stations backend
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::models::{LatLng, RouteSearchResponse, Station, StationsResponse};
use crate::services::error::ApiError;

/// Which slice of `/stations` to ask for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StationQuery {
    All,
    Near { center: LatLng, radius_km: f64 },
}

impl StationQuery {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            StationQuery::All => Vec::new(),
            StationQuery::Near { center, radius_km } => vec![
                ("lat", center.lat.to_string()),
                ("lon", center.lng.to_string()),
                ("radius_km", radius_km.to_string()),
            ],
        }
    }
}

pub fn stations_path() -> &'static str {
    "/stations"
}

/// Read and write share the same path
pub fn station_data_path(station_id: &str) -> String {
    format!("/data/{}", encode_path_segment(station_id))
}

/// Percent-encode one path segment with the `encodeURIComponent` character set.
/// Plain Rust so the paths stay testable off the browser.
fn encode_path_segment(segment: &str) -> String {
    const KEEP: &[u8] = b"-_.!~*'()";
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || KEEP.contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

pub fn chargers_on_route_path() -> &'static str {
    "/chargers-on-route"
}

pub fn chargers_on_route_params(
    origin: LatLng,
    destination: LatLng,
    max_distance_km: f64,
) -> Vec<(&'static str, String)> {
    vec![
        ("origin", origin.to_query_value()),
        ("destination", destination.to_query_value()),
        ("max_distance", max_distance_km.to_string()),
    ]
}

/// Backend seam; the viewmodels only talk to this
#[allow(async_fn_in_trait)]
pub trait StationsApi {
    async fn fetch_stations(&self, query: StationQuery) -> Result<Vec<Station>, ApiError>;

    async fn fetch_station(&self, station_id: &str) -> Result<Station, ApiError>;

    /// Full replacement write of the record
    async fn update_station(&self, station_id: &str, station: &Station) -> Result<(), ApiError>;

    async fn chargers_on_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        max_distance_km: f64,
    ) -> Result<RouteSearchResponse, ApiError>;
}

/// Stations backend client (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            })
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StationsApi for ApiClient {
    async fn fetch_stations(&self, query: StationQuery) -> Result<Vec<Station>, ApiError> {
        let url = self.endpoint(stations_path());
        log::info!("📡 [API] GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query.query_params())
            .send()
            .await?;

        let body = match Self::ensure_ok(response) {
            // The bounded search answers 404 when nothing is inside the radius
            Err(e) if e.is_not_found() && matches!(query, StationQuery::Near { .. }) => {
                log::info!("📭 [API] No stations inside radius");
                return Ok(Vec::new());
            }
            checked => checked?.json::<StationsResponse>().await?,
        };

        log::info!("✅ [API] {} stations received", body.stations.len());
        Ok(body.stations)
    }

    async fn fetch_station(&self, station_id: &str) -> Result<Station, ApiError> {
        let url = self.endpoint(&station_data_path(station_id));
        log::info!("📡 [API] GET {}", url);

        let response = Request::get(&url).send().await?;
        let station = Self::ensure_ok(response)?.json::<Station>().await?;

        log::info!("✅ [API] Station {} with {} chargers", station.id, station.stations.len());
        Ok(station)
    }

    async fn update_station(&self, station_id: &str, station: &Station) -> Result<(), ApiError> {
        let url = self.endpoint(&station_data_path(station_id));
        log::info!("📤 [API] PUT {} ({} chargers)", url, station.stations.len());

        let response = Request::put(&url)
            .json(station)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;
        Self::ensure_ok(response)?;

        log::info!("✅ [API] Station {} updated", station_id);
        Ok(())
    }

    async fn chargers_on_route(
        &self,
        origin: LatLng,
        destination: LatLng,
        max_distance_km: f64,
    ) -> Result<RouteSearchResponse, ApiError> {
        let url = self.endpoint(chargers_on_route_path());
        log::info!("📡 [API] GET {} ({} -> {})", url, origin.to_query_value(), destination.to_query_value());

        let response = Request::get(&url)
            .query(chargers_on_route_params(origin, destination, max_distance_km))
            .send()
            .await?;
        let body = Self::ensure_ok(response)?
            .json::<RouteSearchResponse>()
            .await?;

        log::info!("✅ [API] {} chargers on route", body.chargers.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = ApiClient::with_base_url("http://127.0.0.1:8000/");
        assert_eq!(api.endpoint(stations_path()), "http://127.0.0.1:8000/stations");
        assert_eq!(
            api.endpoint(&station_data_path("4fba949c")),
            "http://127.0.0.1:8000/data/4fba949c"
        );
    }

    #[test]
    fn station_id_stays_inside_its_path_segment() {
        assert_eq!(station_data_path("a/b?c#d"), "/data/a%2Fb%3Fc%23d");
        assert_eq!(station_data_path("../stations"), "/data/..%2Fstations");
        assert_eq!(station_data_path("Gare Été"), "/data/Gare%20%C3%89t%C3%A9");
        assert_eq!(station_data_path("st_1-(x)"), "/data/st_1-(x)");
    }

    #[test]
    fn bounded_query_uses_lat_lon_radius() {
        let q = StationQuery::Near {
            center: LatLng::new(43.25, -79.84),
            radius_km: 5.0,
        };
        assert_eq!(
            q.query_params(),
            vec![
                ("lat", "43.25".to_string()),
                ("lon", "-79.84".to_string()),
                ("radius_km", "5".to_string()),
            ]
        );
        assert!(StationQuery::All.query_params().is_empty());
    }

    #[test]
    fn route_params_are_comma_pairs() {
        let params = chargers_on_route_params(
            LatLng::new(43.2557, -79.8711),
            LatLng::new(43.6532, -79.3832),
            0.5,
        );
        assert_eq!(params[0], ("origin", "43.2557,-79.8711".to_string()));
        assert_eq!(params[1], ("destination", "43.6532,-79.3832".to_string()));
        assert_eq!(params[2], ("max_distance", "0.5".to_string()));
    }

    #[test]
    fn not_found_is_detectable() {
        let err = ApiError::Http { status: 404, status_text: "Not Found".into() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
