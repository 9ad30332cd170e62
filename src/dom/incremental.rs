// ============================================================================
// INCREMENTAL DOM UPDATES
// ============================================================================
// Patch one region in place. A region missing from the current page is a
// no-op, not an error.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{get_element_by_id, replace_element};
use crate::maps::{LeafletMap, MapError};
use crate::state::AppState;
use crate::utils::google_maps_ffi;
use crate::viewmodels::{MapViewModel, RouteViewModel};
use crate::views::{render_calculate_button, render_marker_rows, render_status_modal};
use crate::views::route_view::{CALCULATE_BUTTON_ID, ROUTE_MAP_ID};

/// Fallback map size when the container has no layout yet
const DEFAULT_MAP_PX: (f64, f64) = (640.0, 480.0);

pub fn update_marker_list(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id("marker-list") {
        Some(list) => render_marker_rows(state, &list),
        None => Ok(()),
    }
}

pub fn update_map_markers(state: &AppState) -> Result<(), JsValue> {
    let snapshot = state.markers.snapshot();
    match MapViewModel::sync_markers(&mut LeafletMap::new(), &snapshot) {
        Ok(count) => {
            log::info!("🗺️ [UPDATE] {} markers on map", count);
            Ok(())
        }
        // station map not on this page
        Err(MapError::NotReady) => Ok(()),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

pub fn update_map_center(state: &AppState) -> Result<(), JsValue> {
    match MapViewModel::recenter(&mut LeafletMap::new(), state.map_center.get()) {
        Ok(()) | Err(MapError::NotReady) => Ok(()),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

pub fn update_status_modal(state: &AppState) -> Result<(), JsValue> {
    let current = get_element_by_id("status-modal")
        .ok_or_else(|| JsValue::from_str("Modal not found, needs full render"))?;
    replace_element(&current, &render_status_modal(state)?)
}

pub fn update_route_controls(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id(CALCULATE_BUTTON_ID) {
        Some(button) => replace_element(&button, &render_calculate_button(state)?),
        None => Ok(()),
    }
}

/// Redraw the calculated route and its chargers on the Google map
pub fn update_route_overlay(state: &AppState) -> Result<(), JsValue> {
    let container = match get_element_by_id(ROUTE_MAP_ID) {
        Some(el) => el,
        None => return Ok(()),
    };
    let plan = match state.route.get_plan() {
        Some(plan) => plan,
        None => {
            google_maps_ffi::clear_route_overlay();
            return Ok(());
        }
    };

    let (width, height) = match (container.client_width(), container.client_height()) {
        (w, h) if w > 0 && h > 0 => (w as f64, h as f64),
        _ => DEFAULT_MAP_PX,
    };
    let zoom = RouteViewModel::overlay_zoom(&plan, width, height)
        .unwrap_or(crate::config::CONFIG.map_config.default_zoom as i32);

    let path_json = serde_json::to_string(&plan.path).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let chargers_json = serde_json::to_string(&RouteViewModel::charger_markers(&plan))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("🛣️ [UPDATE] Route overlay: {} points, zoom {}", plan.path.len(), zoom);
    google_maps_ffi::show_route_overlay(&path_json, &chargers_json, zoom);
    Ok(())
}
