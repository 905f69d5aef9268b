//! Collapsible Sidebar
//!
//! Collapsed state survives reloads through a `"true"`/`"false"` flag in
//! local storage.

use browser_kv::KeyValueStore;

use crate::dom::PageNode;

pub struct SidebarToggle<N, S> {
    sidebar: N,
    store: S,
    key: String,
    class: String,
}

impl<N: PageNode, S: KeyValueStore> SidebarToggle<N, S> {
    pub fn new(sidebar: N, store: S, key: impl Into<String>, class: impl Into<String>) -> Self {
        Self { sidebar, store, key: key.into(), class: class.into() }
    }

    /// Apply the stored state. Only an explicit `"true"` collapses.
    pub fn restore(&self) -> bool {
        let collapsed = match self.store.get(&self.key) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("[Sidebar] Could not read {}: {}", self.key, e);
                false
            }
        };
        if collapsed {
            self.sidebar.set_class(&self.class, true);
        }
        collapsed
    }

    /// Flip the collapsed class and persist it. Returns the new state.
    pub fn toggle(&self) -> bool {
        let collapsed = self.sidebar.toggle_class(&self.class);
        let flag = if collapsed { "true" } else { "false" };
        if let Err(e) = self.store.set(&self.key, flag) {
            log::warn!("[Sidebar] Could not persist {}: {}", self.key, e);
        }
        collapsed
    }
}
