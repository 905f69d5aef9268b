//! Iconography UI
//!
//! WebAssembly handlers for the server-rendered icon gallery pages:
//! candle (veneration) toggling, display name editing, icon deletion,
//! the collapsible sidebar and the comment length counter.

pub mod commands;
pub mod components;
pub mod config;
pub mod dom;
pub mod globals;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::load();
    logging::init(config.log_level);
    log::info!("[APP] Attaching page handlers");
    bindings::attach(&config);
    globals::install();
}

/// Module export; pages reach it through `window.toggleCandle`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = toggleCandle)]
pub fn toggle_candle(icon_id: u32) {
    bindings::toggle_candle(models::IconId(icon_id));
}

/// Module export; pages reach it through `window.deleteIcon`
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = deleteIcon)]
pub fn delete_icon(icon_id: u32) {
    bindings::delete_icon(models::IconId(icon_id));
}
