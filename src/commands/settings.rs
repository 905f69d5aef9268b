//! Settings Commands

pub const DISPLAY_NAME_PATH: &str = "/settings/edit/display_name";

/// Form field the server reads the new name from
pub const DISPLAY_NAME_FIELD: &str = "new_display_name";

#[cfg(target_arch = "wasm32")]
pub(super) async fn update_display_name(api: &super::HttpApi, name: &str) -> Result<(), super::ApiError> {
    use gloo_net::http::Request;
    use super::ApiError;

    let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
    form.append_with_str(DISPLAY_NAME_FIELD, name)
        .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;

    let resp = Request::post(&api.url(DISPLAY_NAME_PATH))
        .body(form)
        .map_err(super::transport)?
        .send()
        .await
        .map_err(super::transport)?;
    super::ensure_ok(resp)?;
    Ok(())
}
