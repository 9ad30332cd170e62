// ============================================================================
// GOOGLE MAPS FFI - Wrappers over the JS bridge (static/js/map_bridge.js)
// ============================================================================
// Wrappers only - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Load the Maps JS API (places library) and create the route map in `container_id`
    #[wasm_bindgen(js_name = initGoogleMap)]
    pub fn init_google_map(container_id: &str, api_key: &str, center_lat: f64, center_lng: f64, zoom: f64);

    /// Places autocomplete on an input; `on_place` receives formatted_address or name
    #[wasm_bindgen(js_name = attachPlacesAutocomplete)]
    pub fn attach_places_autocomplete(input_id: &str, on_place: &js_sys::Function);

    /// DirectionsService DRIVING request. Resolves to a JSON string `[{lat,lng}, ...]`.
    #[wasm_bindgen(js_name = requestDrivingRoute)]
    pub fn request_driving_route(origin_lat: f64, origin_lng: f64, dest_lat: f64, dest_lng: f64) -> js_sys::Promise;

    /// Replace the drawn route + charger markers (JSON payloads)
    #[wasm_bindgen(js_name = showRouteOverlay)]
    pub fn show_route_overlay(path_json: &str, chargers_json: &str, zoom: i32);

    #[wasm_bindgen(js_name = clearRouteOverlay)]
    pub fn clear_route_overlay();
}

/// Blocking user alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("⚠️ [ALERT] Could not show alert: {:?}", e);
        }
    }
}
