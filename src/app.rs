// ============================================================================
// APP - Root of the pure-DOM application
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::*;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::request_update;
use crate::router::{current_page, Page};
use crate::state::{AppState, IncrementalUpdate};
use crate::viewmodels::MarkerListViewModel;
use crate::views::{mount_map_view, mount_route_view, render_app};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.set_page(current_page());

        // New marker collection: list + map follow, selection kept while still listed
        let (selected, store) = (state.selected_station.clone(), state.markers.clone());
        state.markers.subscribe(move || {
            MarkerListViewModel::retain_selection(&selected, &store.snapshot());
            request_update(IncrementalUpdate::MarkerList);
            request_update(IncrementalUpdate::MapMarkers);
        });

        state.map_center.subscribe(|| request_update(IncrementalUpdate::MapCenter));

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let page = self.state.current_page();
        log::info!("🎬 [APP] Rendering {:?}", page);

        clear_children(&self.root);
        append_child(&self.root, &render_app(&self.state)?)?;

        // maps need their container in the document
        match page {
            Page::Home => {
                mount_map_view(&self.state)?;
                update_map_markers(&self.state)?;
            }
            Page::RouteMap => mount_route_view(&self.state)?,
            Page::Loyalty => {}
        }
        Ok(())
    }

    /// Hash changed: switch page and re-render everything
    pub fn navigate(&mut self, page: Page) -> Result<(), JsValue> {
        if page == self.state.current_page() {
            return Ok(());
        }
        log::info!("🧭 [APP] {:?} -> {:?}", self.state.current_page(), page);
        self.state.set_page(page);
        self.render()
    }

    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::MarkerList => update_marker_list(&self.state),
            IncrementalUpdate::MapMarkers => update_map_markers(&self.state),
            IncrementalUpdate::MapCenter => update_map_center(&self.state),
            IncrementalUpdate::StatusModal => update_status_modal(&self.state),
            IncrementalUpdate::RouteOverlay => update_route_overlay(&self.state),
            IncrementalUpdate::RouteControls => update_route_controls(&self.state),
        }
    }
}
