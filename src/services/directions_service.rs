// ============================================================================
// DIRECTIONS SERVICE - Google DirectionsService through the JS bridge
// ============================================================================

use wasm_bindgen_futures::JsFuture;

use crate::models::LatLng;
use crate::services::error::ApiError;
use crate::utils::google_maps_ffi::request_driving_route;

/// Decode the bridge's `[{lat,lng}, ...]` payload
pub fn parse_route_path(json: &str) -> Result<Vec<LatLng>, ApiError> {
    let path: Vec<LatLng> =
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))?;
    if path.is_empty() {
        return Err(ApiError::Provider("directions returned an empty route".to_string()));
    }
    Ok(path)
}

#[derive(Clone, Default)]
pub struct DirectionsService;

impl DirectionsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn driving_route(&self, origin: LatLng, destination: LatLng) -> Result<Vec<LatLng>, ApiError> {
        log::info!("🧭 [DIRECTIONS] {} -> {}", origin.to_query_value(), destination.to_query_value());

        let promise = request_driving_route(origin.lat, origin.lng, destination.lat, destination.lng);
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Provider(format!("{:?}", e)))?;
        let json = value
            .as_string()
            .ok_or_else(|| ApiError::Decode("directions payload is not a string".to_string()))?;

        let path = parse_route_path(&json)?;
        log::info!("✅ [DIRECTIONS] {} points", path.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_points() {
        let path = parse_route_path(r#"[{"lat":43.25,"lng":-79.87},{"lat":43.65,"lng":-79.38}]"#).unwrap();
        assert_eq!(path, vec![LatLng::new(43.25, -79.87), LatLng::new(43.65, -79.38)]);
    }

    #[test]
    fn empty_or_garbage_path_fails() {
        assert!(matches!(parse_route_path("[]"), Err(ApiError::Provider(_))));
        assert!(matches!(parse_route_path("not json"), Err(ApiError::Decode(_))));
    }
}
