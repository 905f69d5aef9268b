//! Display Name Editor
//!
//! An in-place editable name with a save button that appears on the first
//! edit. The server-rendered value is kept in `data-original` for rollback.

use crate::commands::{Api, ApiError};
use crate::config::Messages;
use crate::dom::{Page, PageNode};

/// Attribute holding the last server-confirmed name
pub const ORIGINAL_ATTR: &str = "data-original";

const SAVE_BUTTON_DISPLAY: &str = "inline-block";

/// Whitespace trim that also strips U+FEFF, as `String.prototype.trim` does
fn trim_like_js(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub struct DisplayNameEditor<P: Page, A> {
    page: P,
    field: P::Node,
    save_button: P::Node,
    api: A,
    messages: Messages,
}

impl<P: Page, A: Api> DisplayNameEditor<P, A> {
    /// Takes the editable field and its save button; the button starts hidden.
    pub fn new(page: P, field: P::Node, save_button: P::Node, api: A, messages: Messages) -> Self {
        save_button.set_visible(false, SAVE_BUTTON_DISPLAY);
        Self { page, field, save_button, api, messages }
    }

    pub fn on_input(&self) {
        self.save_button.set_visible(true, SAVE_BUTTON_DISPLAY);
    }

    /// Submit the trimmed name.
    ///
    /// Success hides the button and reloads; a rejected save alerts and
    /// restores the original name. Transport failures are only logged.
    pub async fn save(&self) -> Result<(), ApiError> {
        let name = trim_like_js(&self.field.text()).to_string();

        match self.api.update_display_name(&name).await {
            Ok(()) => {
                self.save_button.set_visible(false, SAVE_BUTTON_DISPLAY);
                self.page.alert(&self.messages.profile_updated);
                self.page.reload();
                Ok(())
            }
            Err(ApiError::Transport(e)) => {
                log::error!("[Settings] Display name save failed: {}", e);
                Err(ApiError::Transport(e))
            }
            Err(e) => {
                log::warn!("[Settings] Display name rejected: {}", e);
                self.page.alert(&self.messages.profile_update_failed);
                let original = self.field.attribute(ORIGINAL_ATTR).unwrap_or_default();
                self.field.set_text(&original);
                Err(e)
            }
        }
    }
}
