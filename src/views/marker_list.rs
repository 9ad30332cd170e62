// ============================================================================
// MARKER LIST VIEW - One row per marker, same order as the map
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_click, text_element, ElementBuilder};
use crate::request_update;
use crate::services::ApiClient;
use crate::state::{AppState, IncrementalUpdate};
use crate::viewmodels::{MarkerListViewModel, MarkerRow, StatusViewModel};

pub fn render_marker_list(state: &AppState) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?
        .id("marker-list")?
        .class("marker-list")
        .build();
    render_marker_rows(state, &list)?;

    Ok(ElementBuilder::new("aside")?
        .class("marker-panel")
        .child(text_element("h2", "panel-title", "Charging Stations")?)?
        .child(list)?
        .build())
}

/// Rebuild the rows of an existing `#marker-list`
pub fn render_marker_rows(state: &AppState, list: &Element) -> Result<(), JsValue> {
    clear_children(list);
    let selected = state.selected_station();
    let rows = MarkerListViewModel::rows(&state.markers.snapshot(), selected.as_deref());
    if rows.is_empty() {
        append_child(list, &text_element("li", "marker-empty", "No stations in this area")?)?;
        return Ok(());
    }
    for row in rows {
        append_child(list, &render_row(state, row)?)?;
    }
    Ok(())
}

fn render_row(state: &AppState, row: MarkerRow) -> Result<Element, JsValue> {
    let item = ElementBuilder::new("li")?
        .class(if row.selected { "marker-row selected" } else { "marker-row" })
        .attr("data-index", &row.index.to_string())?
        .child(text_element("strong", "marker-label", &row.label)?)?
        .child(text_element("span", "marker-summary", &row.summary)?)?
        .build();

    if let Some(station_id) = row.station_id.clone() {
        let button = ElementBuilder::new("button")?
            .class("btn-report")
            .attr("type", "button")?
            .text("Report Status")
            .build();
        let state_clone = state.clone();
        on_click(&button, move |e| {
            // the row itself selects on click
            e.stop_propagation();
            let modal = state_clone.status_modal.clone();
            let station_id = station_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                // deferred: shows the loading shell while the read is in flight
                request_update(IncrementalUpdate::StatusModal);
                let _ = StatusViewModel::open(&modal, &api, &station_id).await;
                request_update(IncrementalUpdate::StatusModal);
            });
        })?;
        append_child(&item, &button)?;
    }

    let state_clone = state.clone();
    let (station_id, position) = (row.station_id, row.position);
    on_click(&item, move |_| {
        MarkerListViewModel::select(&state_clone, station_id.as_deref(), position);
        request_update(IncrementalUpdate::MarkerList);
    })?;

    Ok(item)
}
