//! Page Configuration
//!
//! Element ids, endpoint base, user-facing messages and timings. Defaults
//! match the server templates; a page can override any subset by defining
//! `window.__ICONOGRAPHY_UI__` before the module loads.

use serde::{Deserialize, Serialize};

/// Global the page may define to override defaults
pub const WINDOW_CONFIG_KEY: &str = "__ICONOGRAPHY_UI__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Prefix for every request path ("" = same origin)
    pub api_base: String,
    pub elements: ElementIds,
    pub messages: Messages,
    pub candle_active_class: String,
    pub sidebar_collapsed_class: String,
    /// localStorage key holding "true"/"false"
    pub sidebar_storage_key: String,
    /// Fade-out time before a deleted row is removed
    pub delete_fade_ms: u32,
    /// Reload the page when the delete confirmation is declined
    pub reload_on_declined_delete: bool,
    pub comment: CommentLimits,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            elements: ElementIds::default(),
            messages: Messages::default(),
            candle_active_class: "candle-active".to_string(),
            sidebar_collapsed_class: "collapsed".to_string(),
            sidebar_storage_key: "sidebarCollapsed".to_string(),
            delete_fade_ms: 300,
            reload_on_declined_delete: true,
            comment: CommentLimits::default(),
            log_level: log::Level::Info,
        }
    }
}

/// DOM ids of the elements each handler attaches to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub candle_button: String,
    pub veneration_count: String,
    pub display_name: String,
    pub save_button: String,
    /// Rows are `{icon_row_prefix}{icon_id}`
    pub icon_row_prefix: String,
    pub sidebar: String,
    pub sidebar_toggle: String,
    pub comment_text: String,
    pub char_count: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            candle_button: "candle-button".to_string(),
            veneration_count: "veneration-count".to_string(),
            display_name: "display-name".to_string(),
            save_button: "save-btn".to_string(),
            icon_row_prefix: "icon-row-".to_string(),
            sidebar: "sidebar".to_string(),
            sidebar_toggle: "sidebarToggle".to_string(),
            comment_text: "comment-text".to_string(),
            char_count: "char-count".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub profile_updated: String,
    pub profile_update_failed: String,
    pub confirm_delete: String,
    pub delete_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            profile_updated: "Profile updated!".to_string(),
            profile_update_failed: "Failed to update. Try again.".to_string(),
            confirm_delete: "Are you sure you want to delete this icon? This cannot be undone.".to_string(),
            delete_failed: "Error: Could not delete icon. You may not have permission.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentLimits {
    pub max_length: i64,
    /// Counter turns to the warning colour below this many characters
    pub warn_below: i64,
    pub warn_color: String,
}

impl Default for CommentLimits {
    fn default() -> Self {
        Self {
            max_length: 1000,
            warn_below: 50,
            warn_color: "#dc3545".to_string(),
        }
    }
}

/// Read the page override, falling back to defaults
#[cfg(target_arch = "wasm32")]
pub fn load() -> Config {
    let Some(window) = web_sys::window() else {
        return Config::default();
    };
    let raw = match js_sys::Reflect::get(&window, &WINDOW_CONFIG_KEY.into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Config::default(),
    };
    match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(e) => {
            // logging is not initialised yet
            web_sys::console::warn_1(&format!("[Config] Ignoring {}: {}", WINDOW_CONFIG_KEY, e).into());
            Config::default()
        }
    }
}
