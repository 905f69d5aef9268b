//! Browser implementation of the DOM seam over `web-sys`.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::dom::{Page, PageNode};

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Page for WebPage {
    type Node = WebNode;

    fn element(&self, id: &str) -> Option<WebNode> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(WebNode)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("[Page] Reload failed: {:?}", e);
        }
    }

    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

#[derive(Clone)]
pub struct WebNode(HtmlElement);

impl WebNode {
    /// Run `handler` on every `event` for the lifetime of the page
    pub fn on(&self, event: &str, handler: impl FnMut() + 'static) {
        let cb = Closure::<dyn FnMut()>::new(handler);
        if let Err(e) = self
            .0
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        {
            log::error!("[Page] Could not listen for {} on #{}: {:?}", event, self.0.id(), e);
        }
        cb.forget();
    }
}

impl PageNode for WebNode {
    fn text(&self) -> String {
        self.0.inner_text()
    }

    fn set_text(&self, text: &str) {
        self.0.set_inner_text(text);
    }

    fn value(&self) -> String {
        if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else {
            self.text()
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        if let Err(e) = self.0.class_list().toggle_with_force(class, on) {
            log::error!("[Page] Could not set class {:?} on #{}: {:?}", class, self.0.id(), e);
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|_| self.has_class(class))
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.0.style().set_property(property, value) {
            log::error!("[Page] Could not set {}: {} on #{}: {:?}", property, value, self.0.id(), e);
        }
    }

    fn remove(&self) {
        self.0.remove();
    }
}
