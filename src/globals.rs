//! Page Globals
//!
//! Server templates call `toggleCandle(id)` and `deleteIcon(id)` from inline
//! `onclick` attributes, which resolve against `window`. Module exports are
//! not visible there, so `install` publishes both functions on `window`.

use crate::models::IconId;

pub const TOGGLE_CANDLE: &str = "toggleCandle";
pub const DELETE_ICON: &str = "deleteIcon";

/// The inline handler a template renders for `global` and `icon`
pub fn onclick(global: &str, icon: IconId) -> String {
    format!("{}({})", global, icon)
}

#[cfg(target_arch = "wasm32")]
pub use browser::install;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;

    use super::{DELETE_ICON, TOGGLE_CANDLE};
    use crate::bindings;
    use crate::models::IconId;

    fn window() -> Option<web_sys::Window> {
        let window = web_sys::window();
        if window.is_none() {
            log::error!("[Globals] No window; inline handlers unavailable");
        }
        window
    }

    fn set_global(window: &web_sys::Window, name: &str, handler: JsValue) {
        match js_sys::Reflect::set(window, &name.into(), &handler) {
            Ok(true) => log::debug!("[Globals] window.{} installed", name),
            Ok(false) => log::error!("[Globals] window.{} is read-only", name),
            Err(e) => log::error!("[Globals] Could not install window.{}: {:?}", name, e),
        }
    }

    pub fn install() {
        let Some(window) = window() else {
            return;
        };

        let toggle = Closure::<dyn Fn(u32)>::new(|id: u32| bindings::toggle_candle(IconId(id)));
        set_global(&window, TOGGLE_CANDLE, toggle.into_js_value());

        let delete = Closure::<dyn Fn(u32)>::new(|id: u32| bindings::delete_icon(IconId(id)));
        set_global(&window, DELETE_ICON, delete.into_js_value());
    }
}
