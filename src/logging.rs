//! Console logging through the `log` facade.

pub fn init(level: log::Level) {
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("[Log] Logger already set: {}", e).into());
    }
}
