// ============================================================================
// MARKER LIST VIEWMODEL - Rows + selection
// ============================================================================

use std::cell::RefCell;

use crate::models::{LatLng, Marker};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRow {
    pub index: usize,
    pub label: String,
    pub summary: String,
    pub position: LatLng,
    /// Present when the status report can be opened for this row
    pub station_id: Option<String>,
    pub selected: bool,
}

pub struct MarkerListViewModel;

impl MarkerListViewModel {
    pub fn rows(markers: &[Marker], selected: Option<&str>) -> Vec<MarkerRow> {
        markers
            .iter()
            .enumerate()
            .map(|(index, marker)| MarkerRow {
                index,
                label: marker.label().to_string(),
                summary: marker.popup.summary.clone(),
                position: marker.position,
                station_id: marker.id.clone(),
                selected: selected.is_some() && marker.id.as_deref() == selected,
            })
            .collect()
    }

    /// Row click: remember the station and hand its stored position to the map as-is
    pub fn select(state: &AppState, station_id: Option<&str>, position: LatLng) {
        log::info!("👆 [LIST] {:?} selected -> ({}, {})", station_id, position.lat, position.lng);
        *state.selected_station.borrow_mut() = station_id.map(str::to_string);
        state.map_center.set(position);
    }

    /// New collection: keep the selection while its station is still listed.
    /// Returns whether a selection survived.
    pub fn retain_selection(selected: &RefCell<Option<String>>, markers: &[Marker]) -> bool {
        let mut selected = selected.borrow_mut();
        let listed = selected
            .as_deref()
            .map_or(false, |id| markers.iter().any(|m| m.id.as_deref() == Some(id)));
        if !listed {
            *selected = None;
        }
        listed
    }
}
