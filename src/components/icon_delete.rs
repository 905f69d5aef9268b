//! Icon Deletion
//!
//! Confirm, delete on the server, then fade out and drop the icon's row.

use crate::commands::{Api, ApiError};
use crate::config::Config;
use crate::dom::{Page, PageNode};
use crate::models::IconId;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteSettings {
    pub confirm_message: String,
    pub failure_message: String,
    pub row_prefix: String,
    pub fade_ms: u32,
    pub reload_on_decline: bool,
}

impl From<&Config> for DeleteSettings {
    fn from(config: &Config) -> Self {
        Self {
            confirm_message: config.messages.confirm_delete.clone(),
            failure_message: config.messages.delete_failed.clone(),
            row_prefix: config.elements.icon_row_prefix.clone(),
            fade_ms: config.delete_fade_ms,
            reload_on_decline: config.reload_on_declined_delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
}

pub struct IconDeleter<P, A> {
    page: P,
    api: A,
    settings: DeleteSettings,
}

impl<P: Page, A: Api> IconDeleter<P, A> {
    pub fn new(page: P, api: A, settings: DeleteSettings) -> Self {
        Self { page, api, settings }
    }

    pub fn row_id(&self, icon: IconId) -> String {
        format!("{}{}", self.settings.row_prefix, icon)
    }

    pub async fn delete(&self, icon: IconId) -> Result<DeleteOutcome, ApiError> {
        if !self.page.confirm(&self.settings.confirm_message) {
            if self.settings.reload_on_decline {
                self.page.reload();
            }
            return Ok(DeleteOutcome::Declined);
        }

        match self.api.delete_icon(icon).await {
            Ok(()) => {}
            Err(ApiError::Transport(e)) => {
                log::error!("[Delete] Icon {} delete failed: {}", icon, e);
                return Err(ApiError::Transport(e));
            }
            Err(e) => {
                log::warn!("[Delete] Icon {} delete refused: {}", icon, e);
                self.page.alert(&self.settings.failure_message);
                return Err(e);
            }
        }

        let row_id = self.row_id(icon);
        match self.page.element(&row_id) {
            Some(row) => {
                row.set_style("opacity", "0");
                self.page.sleep(self.settings.fade_ms).await;
                row.remove();
            }
            None => log::warn!("[Delete] Icon {} deleted but #{} is not on the page", icon, row_id),
        }
        Ok(DeleteOutcome::Deleted)
    }
}
