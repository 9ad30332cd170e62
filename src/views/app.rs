// ============================================================================
// APP VIEW - Navigation bar + current page + status modal host
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::Page;
use crate::state::AppState;
use crate::views::{render_loyalty, render_map_view, render_marker_list, render_route_view, render_status_modal};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let page = state.current_page();

    let container = ElementBuilder::new("div")?
        .class("app-container")
        .child(render_nav(page)?)?
        .build();

    let main = ElementBuilder::new("main")?.class("page").build();
    let content = match page {
        Page::Home => render_home(state)?,
        Page::RouteMap => render_route_view(state)?,
        Page::Loyalty => render_loyalty()?,
    };
    append_child(&main, &content)?;
    append_child(&container, &main)?;

    append_child(&container, &render_status_modal(state)?)?;
    Ok(container)
}

fn render_nav(active: Page) -> Result<Element, JsValue> {
    let links = ElementBuilder::new("ul")?.class("nav-links").build();
    for page in Page::NAV {
        let link = ElementBuilder::new("a")?
            .class(if page == active { "nav-link active" } else { "nav-link" })
            .attr("href", page.hash())?
            .text(page.nav_label())
            .build();
        let item = ElementBuilder::new("li")?.child(link)?.build();
        append_child(&links, &item)?;
    }

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .child(ElementBuilder::new("span")?.class("brand").text("EV Charger Finder").build())?
        .child(links)?
        .build())
}

/// Station list beside the station map
fn render_home(state: &AppState) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("home-layout")
        .child(render_marker_list(state)?)?
        .child(render_map_view()?)?
        .build())
}
