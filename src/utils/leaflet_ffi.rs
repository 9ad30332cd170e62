// ============================================================================
// LEAFLET FFI - Wrappers over the JS bridge (static/js/map_bridge.js)
// ============================================================================
// Wrappers only - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Create the Leaflet map. `on_move_end(center_lat, center_lng, south, west, north, east)`
    /// fires after every move and once right after creation.
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(
        container_id: &str,
        center_lat: f64,
        center_lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
        on_move_end: &js_sys::Function,
    );

    /// Replace every marker with the given JSON array of `MapMarker`
    #[wasm_bindgen(js_name = setLeafletMarkers)]
    pub fn set_leaflet_markers(markers_json: &str);

    #[wasm_bindgen(js_name = setLeafletCenter)]
    pub fn set_leaflet_center(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = isLeafletMapReady)]
    pub fn is_leaflet_map_ready() -> bool;
}
