//! Sales analytics dashboard compiled to WASM.
//!
//! `shared::dashboard_data` holds the load cycle used by every dashboard:
//! fan-out over the endpoint gateway, join, derive, then settle the
//! view-state machine.

pub mod app;
pub mod dashboards;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("salesdash frontend starting");

    leptos::mount::mount_to_body(app::App);
}
