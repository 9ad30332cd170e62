// ============================================================================
// EV CHARGER FINDER - FRONTEND MVVM (PURE RUST / WASM)
// ============================================================================
// - Views: functions that build DOM, no logic
// - ViewModels: UI logic over the state
// - Services: backend + provider calls only
// - State: Rc<RefCell> containers with subscribers
// - Models: shapes shared with the backend
// ============================================================================

mod app;
mod config;
mod dom;
mod maps;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::{IncrementalUpdate, UpdateType};

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 EV Charger Finder - Rust + MVVM (backend {})", CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // registered once for the lifetime of the page
    dom::on_hash_change(|_| {
        let page = router::current_page();
        rerender_app_with_type(UpdateType::Navigate(page));
    })?;

    Ok(())
}

/// Queue an incremental update for after the current task.
/// Coalesces with whatever else the same task changed.
pub fn request_update(update: IncrementalUpdate) {
    Timeout::new(0, move || rerender_app_with_type(UpdateType::Incremental(update))).forget();
}

pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|cell| {
        let mut guard = cell.borrow_mut();
        let app = match guard.as_mut() {
            Some(app) => app,
            None => {
                log::warn!("⚠️ [UPDATE] App not initialised");
                return;
            }
        };

        let result = match update_type {
            UpdateType::Incremental(update) => match app.update_incremental(update.clone()) {
                Err(e) if format!("{:?}", e).contains("needs full render") => {
                    log::info!("🔄 [UPDATE] {:?} falls back to full render", update);
                    app.render()
                }
                other => other,
            },
            UpdateType::Navigate(page) => app.navigate(page),
            UpdateType::FullRender => app.render(),
        };

        if let Err(e) = result {
            log::error!("❌ [UPDATE] {:?}", e);
        }
    });
}

/// Callable from the JS console
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
