// ============================================================================
// GEOCODING SERVICE - Google Geocoding REST API (HTTP only)
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::CONFIG;
use crate::models::LatLng;
use crate::services::error::ApiError;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeGeometry {
    pub location: LatLng,
}

impl GeocodeResponse {
    /// First result's location; anything else is an error
    pub fn first_location(&self) -> Result<LatLng, ApiError> {
        if self.status != "OK" {
            return Err(ApiError::Provider(format!("geocoding status {}", self.status)));
        }
        self.results
            .first()
            .map(|r| r.geometry.location)
            .ok_or_else(|| ApiError::Provider("geocoding returned no results".to_string()))
    }
}

#[derive(Clone)]
pub struct GeocodingService {
    api_key: String,
}

impl GeocodingService {
    pub fn new() -> Self {
        Self {
            api_key: CONFIG.google_maps_key().to_string(),
        }
    }

    pub async fn geocode(&self, address: &str) -> Result<LatLng, ApiError> {
        log::info!("📍 [GEOCODE] {}", address);

        let response = Request::get(GEOCODE_URL)
            .query([("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let location = response.json::<GeocodeResponse>().await?.first_location()?;
        log::info!("✅ [GEOCODE] {} -> ({}, {})", address, location.lat, location.lng);
        Ok(location)
    }
}

impl Default for GeocodingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn takes_first_result() {
        let body: GeocodeResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 43.2557, "lng": -79.8711}}, "formatted_address": "Hamilton, ON"},
                {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]
        }))
        .unwrap();
        assert_eq!(body.first_location().unwrap(), LatLng::new(43.2557, -79.8711));
    }

    #[test]
    fn zero_results_is_an_error() {
        let body: GeocodeResponse =
            serde_json::from_value(json!({"status": "ZERO_RESULTS", "results": []})).unwrap();
        assert!(matches!(body.first_location(), Err(ApiError::Provider(_))));
    }
}
