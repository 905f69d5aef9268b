//! Candle Toggle
//!
//! Lights or snuffs the viewer's candle for an icon and mirrors the
//! server's count.

use crate::commands::{Api, ApiError};
use crate::dom::PageNode;
use crate::models::{IconId, ToggleResult};

pub struct CandleToggle<N, A> {
    button: N,
    counter: N,
    api: A,
    active_class: String,
}

impl<N: PageNode, A: Api> CandleToggle<N, A> {
    pub fn new(button: N, counter: N, api: A, active_class: impl Into<String>) -> Self {
        Self { button, counter, api, active_class: active_class.into() }
    }

    /// Toggle the candle for `icon`.
    ///
    /// The page is only touched on success; failures are returned for the
    /// caller to log and are never shown to the user.
    pub async fn toggle(&self, icon: IconId) -> Result<ToggleResult, ApiError> {
        let result = self.api.venerate(icon).await?;
        self.counter.set_text(&result.count.to_string());
        self.button.set_class(&self.active_class, result.action.is_lit());
        Ok(result)
    }
}
