//! Server Command Wrappers
//!
//! Frontend bindings to the HTTP endpoints, organized by domain.
//! `Api` is the seam the components are written against; `HttpApi` is the
//! browser implementation over `gloo-net`.

mod icon;
mod settings;

use thiserror::Error;

use crate::models::{IconId, ToggleResult};

pub use icon::{decode_toggle, delete_path, venerate_path};
pub use settings::{DISPLAY_NAME_FIELD, DISPLAY_NAME_PATH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// 2xx with a body that does not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Server operations used by the page handlers
#[allow(async_fn_in_trait)]
pub trait Api {
    /// `POST /icon/{id}/venerate`
    async fn venerate(&self, icon: IconId) -> Result<ToggleResult, ApiError>;

    /// `POST /settings/edit/display_name`
    async fn update_display_name(&self, name: &str) -> Result<(), ApiError>;

    /// `POST /icon/{id}/delete`
    async fn delete_icon(&self, icon: IconId) -> Result<(), ApiError>;
}

/// Same-origin (or `base`-prefixed) HTTP client
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[cfg(target_arch = "wasm32")]
impl Api for HttpApi {
    async fn venerate(&self, icon: IconId) -> Result<ToggleResult, ApiError> {
        icon::venerate(self, icon).await
    }

    async fn update_display_name(&self, name: &str) -> Result<(), ApiError> {
        settings::update_display_name(self, name).await
    }

    async fn delete_icon(&self, icon: IconId) -> Result<(), ApiError> {
        icon::delete(self, icon).await
    }
}

#[cfg(target_arch = "wasm32")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Map a finished response to `Status` unless it is 2xx
#[cfg(target_arch = "wasm32")]
fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}
