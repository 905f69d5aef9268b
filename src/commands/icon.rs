//! Icon Commands
//!
//! Veneration toggle and deletion.

use crate::models::{IconId, ToggleResult};
use super::ApiError;

pub fn venerate_path(icon: IconId) -> String {
    format!("/icon/{}/venerate", icon)
}

pub fn delete_path(icon: IconId) -> String {
    format!("/icon/{}/delete", icon)
}

/// Parse the body of a successful venerate response
pub fn decode_toggle(body: &str) -> Result<ToggleResult, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub(super) async fn venerate(api: &super::HttpApi, icon: IconId) -> Result<ToggleResult, ApiError> {
    use gloo_net::http::Request;

    let resp = Request::post(&api.url(&venerate_path(icon)))
        .send()
        .await
        .map_err(super::transport)?;
    let resp = super::ensure_ok(resp)?;
    let body = resp.text().await.map_err(super::transport)?;
    decode_toggle(&body)
}

#[cfg(target_arch = "wasm32")]
pub(super) async fn delete(api: &super::HttpApi, icon: IconId) -> Result<(), ApiError> {
    use gloo_net::http::Request;

    let resp = Request::post(&api.url(&delete_path(icon)))
        .send()
        .await
        .map_err(super::transport)?;
    super::ensure_ok(resp)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandleAction;

    #[test]
    fn test_paths() {
        assert_eq!(venerate_path(IconId(17)), "/icon/17/venerate");
        assert_eq!(delete_path(IconId(17)), "/icon/17/delete");
    }

    #[test]
    fn test_decode_toggle() {
        let result = decode_toggle(r#"{"action": "lit", "count": 3}"#).unwrap();
        assert_eq!(result.action, CandleAction::Lit);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_decode_error_body() {
        // 401 bodies look like this; a 2xx with it is still a decode failure
        let err = decode_toggle(r#"{"error": "Login required"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
