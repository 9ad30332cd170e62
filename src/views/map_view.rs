// ============================================================================
// MAP VIEW - Leaflet station map
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::models::{Bounds, LatLng, Viewport};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::leaflet_ffi;
use crate::viewmodels::MapViewModel;

pub const MAP_CONTAINER_ID: &str = "station-map";

type MoveEndCallback = Closure<dyn FnMut(f64, f64, f64, f64, f64, f64)>;

thread_local! {
    /// `moveend` callback of the live Leaflet map
    static MOVE_END: RefCell<Option<MoveEndCallback>> = RefCell::new(None);
}

pub fn render_map_view() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("station-map")
        .build())
}

/// Create the Leaflet map once its container is in the document.
/// Every `moveend` (and the first one after creation) refreshes the markers.
pub fn mount_map_view(state: &AppState) -> Result<(), JsValue> {
    let center = state.map_center.get();
    let map = &CONFIG.map_config;
    log::info!("🗺️ [MAP] Mounting Leaflet at ({}, {})", center.lat, center.lng);

    let store = state.markers.clone();
    let on_move_end = Closure::wrap(Box::new(
        move |lat: f64, lng: f64, south: f64, west: f64, north: f64, east: f64| {
            let viewport = Viewport {
                center: LatLng::new(lat, lng),
                bounds: Bounds::new(LatLng::new(south, west), LatLng::new(north, east)),
            };
            let query = MapViewModel::station_query(&viewport, &CONFIG.search_config);
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                if let Ok(false) = MapViewModel::refresh(&store, &api, query).await {
                    log::info!("⏭️ [MAP] Superseded refresh ignored");
                }
            });
        },
    ) as Box<dyn FnMut(f64, f64, f64, f64, f64, f64)>);

    leaflet_ffi::init_leaflet_map(
        MAP_CONTAINER_ID,
        center.lat,
        center.lng,
        map.default_zoom,
        &map.tile_url,
        &map.tile_attribution,
        on_move_end.as_ref().unchecked_ref(),
    );
    // the bridge removed the previous map before creating this one,
    // so its callback can no longer fire
    MOVE_END.with(|slot| *slot.borrow_mut() = Some(on_move_end));
    Ok(())
}
