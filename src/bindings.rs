//! Page Bindings
//!
//! Resolves each handler's elements once at start-up and wires them to DOM
//! events. Handlers whose elements are missing are skipped; most pages only
//! carry one or two of them.

use std::cell::RefCell;
use std::rc::Rc;

use browser_kv::{KeyValueStore, LocalStorage, MemoryStore};
use wasm_bindgen_futures::spawn_local;

use crate::commands::HttpApi;
use crate::components::{CandleToggle, CommentCounter, DeleteSettings, DisplayNameEditor, IconDeleter, SidebarToggle};
use crate::config::Config;
use crate::dom::Page;
use crate::models::IconId;
use crate::web::{WebNode, WebPage};

/// Handlers invoked from inline `onclick` attributes
struct PageHandlers {
    candle: Option<Rc<CandleToggle<WebNode, HttpApi>>>,
    deleter: Rc<IconDeleter<WebPage, HttpApi>>,
}

thread_local! {
    static HANDLERS: RefCell<Option<PageHandlers>> = RefCell::new(None);
}

pub fn attach(config: &Config) {
    let Some(page) = WebPage::current() else {
        log::error!("[Bind] No window/document; nothing attached");
        return;
    };
    let api = HttpApi::new(&config.api_base);
    let ids = &config.elements;

    let candle = match (page.element(&ids.candle_button), page.element(&ids.veneration_count)) {
        (Some(button), Some(counter)) => Some(Rc::new(CandleToggle::new(
            button,
            counter,
            api.clone(),
            &config.candle_active_class,
        ))),
        _ => {
            log::debug!("[Bind] No candle on this page");
            None
        }
    };

    attach_display_name(&page, &api, config);
    attach_sidebar(&page, config);
    attach_comment_counter(&page, config);

    let deleter = Rc::new(IconDeleter::new(page, api, DeleteSettings::from(config)));
    HANDLERS.with(|handlers| *handlers.borrow_mut() = Some(PageHandlers { candle, deleter }));
}

fn attach_display_name(page: &WebPage, api: &HttpApi, config: &Config) {
    let ids = &config.elements;
    let (Some(field), Some(button)) = (page.element(&ids.display_name), page.element(&ids.save_button)) else {
        log::debug!("[Bind] No display name editor on this page");
        return;
    };

    let editor = Rc::new(DisplayNameEditor::new(
        page.clone(),
        field.clone(),
        button.clone(),
        api.clone(),
        config.messages.clone(),
    ));

    let on_input = Rc::clone(&editor);
    field.on("input", move || on_input.on_input());

    button.on("click", move || {
        let editor = Rc::clone(&editor);
        spawn_local(async move {
            // outcome already surfaced to the user or the log
            let _ = editor.save().await;
        });
    });
}

fn attach_sidebar(page: &WebPage, config: &Config) {
    let ids = &config.elements;
    let (Some(sidebar), Some(button)) = (page.element(&ids.sidebar), page.element(&ids.sidebar_toggle)) else {
        log::debug!("[Bind] No sidebar on this page");
        return;
    };

    let store: Rc<dyn KeyValueStore> = match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("[Sidebar] {}; collapsed state will not persist", e);
            Rc::new(MemoryStore::new())
        }
    };

    let toggle = SidebarToggle::new(
        sidebar,
        store,
        &config.sidebar_storage_key,
        &config.sidebar_collapsed_class,
    );
    toggle.restore();
    button.on("click", move || {
        toggle.toggle();
    });
}

fn attach_comment_counter(page: &WebPage, config: &Config) {
    let ids = &config.elements;
    let (Some(textarea), Some(count)) = (page.element(&ids.comment_text), page.element(&ids.char_count)) else {
        return;
    };

    let counter = CommentCounter::new(textarea.clone(), count, config.comment.clone());
    textarea.on("input", move || {
        counter.on_input();
    });
}

pub fn toggle_candle(icon: IconId) {
    let candle = HANDLERS.with(|handlers| handlers.borrow().as_ref().and_then(|h| h.candle.clone()));
    let Some(candle) = candle else {
        log::warn!("[Candle] toggleCandle({}) called on a page without a candle", icon);
        return;
    };

    spawn_local(async move {
        match candle.toggle(icon).await {
            Ok(result) => log::debug!("[Candle] Icon {} {:?}, count={}", icon, result.action, result.count),
            Err(e) => log::debug!("[Candle] Toggle for icon {} ignored: {}", icon, e),
        }
    });
}

pub fn delete_icon(icon: IconId) {
    let deleter = HANDLERS.with(|handlers| handlers.borrow().as_ref().map(|h| Rc::clone(&h.deleter)));
    let Some(deleter) = deleter else {
        log::warn!("[Delete] deleteIcon({}) called before start-up", icon);
        return;
    };

    spawn_local(async move {
        if let Ok(outcome) = deleter.delete(icon).await {
            log::debug!("[Delete] Icon {}: {:?}", icon, outcome);
        }
    });
}
