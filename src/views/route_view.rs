// ============================================================================
// ROUTE VIEW - Origin / destination inputs + Google route map
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, on_click, on_input, text_element, ElementBuilder};
use crate::request_update;
use crate::services::ApiClient;
use crate::state::{AppState, IncrementalUpdate, RouteState};
use crate::utils::google_maps_ffi::{alert, attach_places_autocomplete, init_google_map};
use crate::viewmodels::{GoogleRouteProvider, RouteViewModel};

pub const ROUTE_MAP_ID: &str = "route-map";
pub const ORIGIN_INPUT_ID: &str = "origin-input";
pub const DESTINATION_INPUT_ID: &str = "destination-input";
pub const CALCULATE_BUTTON_ID: &str = "calculate-route";

pub fn render_route_view(state: &AppState) -> Result<Element, JsValue> {
    let (origin, destination) = state.route.inputs();

    let origin_input = render_place_input(ORIGIN_INPUT_ID, "Origin", &origin)?;
    let route = state.route.clone();
    on_input(&origin_input, move |e| {
        if let Some(value) = input_event_value(&e) {
            route.set_origin(&value);
        }
    })?;

    let destination_input = render_place_input(DESTINATION_INPUT_ID, "Destination", &destination)?;
    let route = state.route.clone();
    on_input(&destination_input, move |e| {
        if let Some(value) = input_event_value(&e) {
            route.set_destination(&value);
        }
    })?;

    let controls = ElementBuilder::new("div")?
        .class("route-controls")
        .child(origin_input)?
        .child(destination_input)?
        .child(render_calculate_button(state)?)?
        .build();

    let container = ElementBuilder::new("section")?
        .class("route-view")
        .child(text_element("h1", "route-title", "Plan a Route")?)?
        .child(controls)?
        .build();
    append_child(
        &container,
        &ElementBuilder::new("div")?.id(ROUTE_MAP_ID)?.class("route-map").build(),
    )?;
    Ok(container)
}

fn render_place_input(id: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .id(id)?
        .class("place-input")
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build())
}

fn input_event_value(e: &web_sys::InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Button reflects whether a calculation is in flight
pub fn render_calculate_button(state: &AppState) -> Result<Element, JsValue> {
    let calculating = *state.route.calculating.borrow();
    let button = ElementBuilder::new("button")?
        .id(CALCULATE_BUTTON_ID)?
        .class("btn-primary")
        .attr("type", "button")?
        .text(if calculating { "Calculating…" } else { "Calculate Route" })
        .build();
    if calculating {
        button.set_attribute("disabled", "")?;
    }

    let route = state.route.clone();
    on_click(&button, move |_| start_calculation(route.clone()))?;
    Ok(button)
}

fn start_calculation(route: RouteState) {
    wasm_bindgen_futures::spawn_local(async move {
        let provider = GoogleRouteProvider::new();
        let api = ApiClient::new();
        request_update(IncrementalUpdate::RouteControls);

        let corridor = CONFIG.search_config.route_corridor_km;
        match RouteViewModel::calculate(&route, &provider, &api, corridor).await {
            Ok(true) => request_update(IncrementalUpdate::RouteOverlay),
            Ok(false) => log::info!("⏭️ [ROUTE] Superseded calculation ignored"),
            Err(e) => alert(e.user_message()),
        }
        request_update(IncrementalUpdate::RouteControls);
    });
}

/// Google map + autocomplete, once the view is in the document
pub fn mount_route_view(state: &AppState) -> Result<(), JsValue> {
    let map = &CONFIG.map_config;
    init_google_map(
        ROUTE_MAP_ID,
        CONFIG.google_maps_key(),
        map.default_center_lat,
        map.default_center_lng,
        map.default_zoom,
    );

    attach_autocomplete(ORIGIN_INPUT_ID, state.route.clone(), RouteState::set_origin)?;
    attach_autocomplete(DESTINATION_INPUT_ID, state.route.clone(), RouteState::set_destination)?;

    // a plan from an earlier visit is drawn again
    if state.route.get_plan().is_some() {
        request_update(IncrementalUpdate::RouteOverlay);
    }
    Ok(())
}

fn attach_autocomplete(input_id: &str, route: RouteState, set: fn(&RouteState, &str)) -> Result<(), JsValue> {
    if get_element_by_id(input_id).is_none() {
        return Err(JsValue::from_str(&format!("#{} not mounted", input_id)));
    }
    let on_place = Closure::wrap(Box::new(move |place: String| {
        log::info!("📍 [ROUTE] Place picked: {}", place);
        set(&route, &place);
    }) as Box<dyn FnMut(String)>);
    attach_places_autocomplete(input_id, on_place.as_ref().unchecked_ref());
    on_place.forget();
    Ok(())
}
