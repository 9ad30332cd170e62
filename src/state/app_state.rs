// ============================================================================
// APP STATE - Root state container, passed by reference to every view
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::LatLng;
use crate::router::Page;
use crate::state::{MarkerStore, ReactiveState, RouteState, StatusModal};

/// Kind of DOM update
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Only the given region
    Incremental(IncrementalUpdate),
    /// Hash route changed
    Navigate(Page),
    /// Whole page
    FullRender,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Rows of the marker list (new collection or selection change)
    MarkerList,
    /// Markers on the Leaflet map (map itself kept)
    MapMarkers,
    MapCenter,
    StatusModal,
    /// Route path + chargers on the Google map
    RouteOverlay,
    /// "Calculating..." state of the route button
    RouteControls,
}

#[derive(Clone)]
pub struct AppState {
    pub page: Rc<RefCell<Page>>,

    // Stations
    pub markers: MarkerStore,
    pub map_center: ReactiveState<LatLng>,
    /// Station id of the highlighted row; survives refreshes that still list it
    pub selected_station: Rc<RefCell<Option<String>>>,

    // Status report
    pub status_modal: Rc<RefCell<StatusModal>>,

    // Route view
    pub route: RouteState,
}

impl AppState {
    pub fn new() -> Self {
        let map = &CONFIG.map_config;
        Self {
            page: Rc::new(RefCell::new(Page::Home)),
            markers: MarkerStore::new(),
            map_center: ReactiveState::new(LatLng::new(map.default_center_lat, map.default_center_lng)),
            selected_station: Rc::new(RefCell::new(None)),
            status_modal: Rc::new(RefCell::new(StatusModal::new())),
            route: RouteState::new(),
        }
    }

    pub fn current_page(&self) -> Page {
        *self.page.borrow()
    }

    pub fn set_page(&self, page: Page) {
        *self.page.borrow_mut() = page;
    }

    pub fn selected_station(&self) -> Option<String> {
        self.selected_station.borrow().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
