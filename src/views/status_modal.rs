// ============================================================================
// STATUS MODAL VIEW - Per-charger status selects, Submit / Cancel
// ============================================================================
// Always rendered as `#status-modal`; hidden while closed.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_change, on_click, select_value, text_element, ElementBuilder};
use crate::models::{StationStatus, SubStation};
use crate::request_update;
use crate::services::ApiClient;
use crate::state::{AppState, IncrementalUpdate, StatusReport};
use crate::viewmodels::StatusViewModel;

pub fn render_status_modal(state: &AppState) -> Result<Element, JsValue> {
    let modal = state.status_modal.borrow();
    let report = match modal.report() {
        Some(report) => report,
        None => {
            return Ok(ElementBuilder::new("div")?
                .id("status-modal")?
                .class("modal hidden")
                .build());
        }
    };

    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(text_element("h3", "modal-title", "Report Charger Status")?)?
        .child(text_element("p", "modal-subtitle", &station_title(report))?)?
        .build();

    if report.load_failed {
        append_child(&content, &text_element("p", "modal-error", "Could not load this station.")?)?;
    } else if report.original.is_none() {
        append_child(&content, &text_element("p", "modal-loading", "Loading…")?)?;
    } else {
        let rows = ElementBuilder::new("div")?.class("status-rows").build();
        for (index, sub) in report.edited.iter().enumerate() {
            append_child(&rows, &render_status_row(state, index, sub, report.submitting)?)?;
        }
        append_child(&content, &rows)?;
    }

    append_child(&content, &render_actions(state, report)?)?;

    Ok(ElementBuilder::new("div")?
        .id("status-modal")?
        .class("modal open")
        .child(ElementBuilder::new("div")?.class("modal-backdrop").build())?
        .child(content)?
        .build())
}

fn station_title(report: &StatusReport) -> String {
    match &report.original {
        Some(station) if !station.name.trim().is_empty() => station.name.clone(),
        _ => format!("Station {}", report.station_id),
    }
}

fn render_status_row(state: &AppState, index: usize, sub: &SubStation, locked: bool) -> Result<Element, JsValue> {
    let label = if sub.name.trim().is_empty() {
        format!("Charger {}", sub.id)
    } else {
        sub.name.clone()
    };

    let select = ElementBuilder::new("select")?.class("status-select").build();
    if locked {
        select.set_attribute("disabled", "")?;
    }
    for status in StationStatus::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .text(status.as_str())
            .build();
        if status == sub.status {
            option.set_attribute("selected", "")?;
        }
        append_child(&select, &option)?;
    }

    let modal = state.status_modal.clone();
    let select_ref = select.clone();
    on_change(&select, move |_| {
        if let Some(value) = select_value(&select_ref) {
            StatusViewModel::set_status(&modal, index, StationStatus::from_label(&value));
        }
    })?;

    Ok(ElementBuilder::new("div")?
        .class(&format!("status-row {}", sub.status.css_class()))
        .child(text_element("span", "status-name", &label)?)?
        .child(select)?
        .build())
}

fn render_actions(state: &AppState, report: &StatusReport) -> Result<Element, JsValue> {
    let cancel = ElementBuilder::new("button")?
        .class("btn-secondary")
        .attr("type", "button")?
        .text("Cancel")
        .build();
    let modal = state.status_modal.clone();
    on_click(&cancel, move |_| {
        StatusViewModel::cancel(&modal);
        request_update(IncrementalUpdate::StatusModal);
    })?;

    let submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "button")?
        .text(if report.submitting { "Submitting…" } else { "Submit" })
        .build();
    if report.submitting || report.original.is_none() {
        submit.set_attribute("disabled", "")?;
    }
    let modal = state.status_modal.clone();
    on_click(&submit, move |_| {
        let modal = modal.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            request_update(IncrementalUpdate::StatusModal);
            let _ = StatusViewModel::submit(&modal, &api).await;
            request_update(IncrementalUpdate::StatusModal);
        });
    })?;

    Ok(ElementBuilder::new("div")?
        .class("modal-actions")
        .child(cancel)?
        .child(submit)?
        .build())
}
