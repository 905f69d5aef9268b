//! In-memory fakes for component tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::commands::{Api, ApiError};
use crate::dom::{Page, PageNode};
use crate::models::{IconId, ToggleResult};

// ========================
// FakeNode
// ========================

#[derive(Debug, Default)]
struct NodeState {
    text: String,
    value: Option<String>,
    attributes: HashMap<String, String>,
    classes: BTreeSet<String>,
    styles: HashMap<String, String>,
    removed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FakeNode(Rc<RefCell<NodeState>>);

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.insert(class.to_string());
        self
    }

    pub fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = Some(value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn is_removed(&self) -> bool {
        self.0.borrow().removed
    }
}

impl PageNode for FakeNode {
    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn value(&self) -> String {
        let state = self.0.borrow();
        state.value.clone().unwrap_or_else(|| state.text.clone())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0.borrow_mut().styles.insert(property.to_string(), value.to_string());
    }

    fn remove(&self) {
        self.0.borrow_mut().removed = true;
    }
}

// ========================
// FakePage
// ========================

#[derive(Debug, Default)]
struct PageState {
    nodes: RefCell<HashMap<String, FakeNode>>,
    confirm_answer: Cell<bool>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
    reloads: Cell<u32>,
    sleeps: RefCell<Vec<u32>>,
}

#[derive(Debug, Clone, Default)]
pub struct FakePage(Rc<PageState>);

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `id`, returning a handle to it
    pub fn insert(&self, id: &str, node: FakeNode) -> FakeNode {
        self.0.nodes.borrow_mut().insert(id.to_string(), node.clone());
        node
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.0.confirm_answer.set(answer);
    }

    pub fn confirms(&self) -> Vec<String> {
        self.0.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.0.alerts.borrow().clone()
    }

    pub fn reloads(&self) -> u32 {
        self.0.reloads.get()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.0.sleeps.borrow().clone()
    }
}

impl Page for FakePage {
    type Node = FakeNode;

    fn element(&self, id: &str) -> Option<FakeNode> {
        self.0
            .nodes
            .borrow()
            .get(id)
            .filter(|node| !node.is_removed())
            .cloned()
    }

    fn alert(&self, message: &str) {
        self.0.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.0.confirms.borrow_mut().push(message.to_string());
        self.0.confirm_answer.get()
    }

    fn reload(&self) {
        self.0.reloads.set(self.0.reloads.get() + 1);
    }

    async fn sleep(&self, millis: u32) {
        self.0.sleeps.borrow_mut().push(millis);
    }
}

// ========================
// FakeApi
// ========================

#[derive(Debug, Default)]
struct ApiState {
    venerate: RefCell<Option<Result<ToggleResult, ApiError>>>,
    display_name: RefCell<Option<Result<(), ApiError>>>,
    delete: RefCell<Option<Result<(), ApiError>>>,
    calls: RefCell<Vec<String>>,
}

/// Scripted server. Unscripted calls fail with a transport error.
#[derive(Debug, Clone, Default)]
pub struct FakeApi(Rc<ApiState>);

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_venerate(&self, response: Result<ToggleResult, ApiError>) {
        *self.0.venerate.borrow_mut() = Some(response);
    }

    pub fn on_display_name(&self, response: Result<(), ApiError>) {
        *self.0.display_name.borrow_mut() = Some(response);
    }

    pub fn on_delete(&self, response: Result<(), ApiError>) {
        *self.0.delete.borrow_mut() = Some(response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.0.calls.borrow_mut().push(call);
    }
}

fn scripted<T: Clone>(slot: &RefCell<Option<Result<T, ApiError>>>) -> Result<T, ApiError> {
    slot.borrow()
        .clone()
        .unwrap_or_else(|| Err(ApiError::Transport("unscripted call".to_string())))
}

impl Api for FakeApi {
    async fn venerate(&self, icon: IconId) -> Result<ToggleResult, ApiError> {
        self.record(format!("venerate {}", icon));
        scripted(&self.0.venerate)
    }

    async fn update_display_name(&self, name: &str) -> Result<(), ApiError> {
        self.record(format!("display_name {}", name));
        scripted(&self.0.display_name)
    }

    async fn delete_icon(&self, icon: IconId) -> Result<(), ApiError> {
        self.record(format!("delete {}", icon));
        scripted(&self.0.delete)
    }
}
