//! DOM Seam
//!
//! The handful of element and window operations the handlers need. The
//! browser implementation lives in `web`; tests use `testing::FakePage`.

/// A single element already present in the page
pub trait PageNode {
    /// Rendered text (`innerText`)
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Form control value; falls back to `text()` for other elements
    fn value(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    /// Add (`on = true`) or remove a class
    fn set_class(&self, class: &str, on: bool);
    /// Flip a class, returning whether it is now present
    fn toggle_class(&self, class: &str) -> bool;
    fn set_style(&self, property: &str, value: &str);
    /// Detach from the document
    fn remove(&self);

    fn set_visible(&self, visible: bool, shown_display: &str) {
        self.set_style("display", if visible { shown_display } else { "none" });
    }
}

/// Document lookup plus the blocking window dialogs
#[allow(async_fn_in_trait)]
pub trait Page {
    type Node: PageNode;

    fn element(&self, id: &str) -> Option<Self::Node>;
    fn alert(&self, message: &str);
    /// `false` when declined or when the dialog could not be shown
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
    async fn sleep(&self, millis: u32);
}
