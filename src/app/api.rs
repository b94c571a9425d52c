//! Browser-side API client for the BlueLink backend.
//!
//! Thin typed wrappers over the fetch API. Every call returns an explicit
//! `Result` - the caller decides what a failure looks like on screen.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A connected Arduino as reported by the backend. Immutable snapshot;
/// the client never edits it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub port: String,
}

/// One controller-button → pin mapping. Display order follows response order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub controller_button: String,
    pub arduino_pin: String,
}

/// Credentials sent to `/login`. No client-side format constraints.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful `/login` answer. Extra fields (token type, expiry) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// What can go wrong talking to the backend.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Network/fetch-level failure (server unreachable, request aborted).
    #[error("network error: {0}")]
    Transport(String),
    /// 401 - the credentials or token were rejected.
    #[error("not authorized")]
    Unauthorized,
    /// Any other non-2xx answer.
    #[error("unexpected status {0}")]
    Status(u16),
    /// A 2xx body that did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Authenticated GET returning the JSON body as `T`.
pub async fn fetch_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let auth = token.map(bearer_header);
    let (status, body) = request("GET", path, auth.as_deref(), None).await?;
    check_status(status)?;
    decode(&body)
}

/// POST a JSON body and decode the JSON answer as `T`.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let payload =
        serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    let (status, body) = request("POST", path, None, Some(payload)).await?;
    check_status(status)?;
    decode(&body)
}

/// Exchange credentials for a bearer token.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    let credentials = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = post_json("/login", &credentials).await?;
    Ok(response.access_token)
}

/// Map an HTTP status onto the error taxonomy. 2xx passes through.
fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// `Authorization` header value for a token.
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Issue the request through the browser fetch API, resolving to the
/// response status and body text. `auth` is the full `Authorization`
/// header value.
#[cfg(target_arch = "wasm32")]
async fn request(
    method: &str,
    path: &str,
    auth: Option<&str>,
    body: Option<String>,
) -> Result<(u16, String), ApiError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let transport = |err: JsValue| ApiError::Transport(format!("{err:?}"));

    let init = web_sys::RequestInit::new();
    init.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let request = web_sys::Request::new_with_str_and_init(path, &init).map_err(transport)?;
    let headers = request.headers();
    if has_body {
        headers.set("Content-Type", "application/json").map_err(transport)?;
    }
    if let Some(auth) = auth {
        headers.set("Authorization", auth).map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| ApiError::Transport("fetch returned a non-Response".into()))?;

    let status = response.status();
    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;

    Ok((status, text.as_string().unwrap_or_default()))
}

/// Server-side rendering never fetches; resources resolve after hydration.
#[cfg(not(target_arch = "wasm32"))]
async fn request(
    _method: &str,
    _path: &str,
    _auth: Option<&str>,
    _body: Option<String>,
) -> Result<(u16, String), ApiError> {
    Err(ApiError::Transport(
        "fetch is only available in the browser".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass_through() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
    }

    #[test]
    fn unauthorized_is_its_own_case() {
        assert_eq!(check_status(401), Err(ApiError::Unauthorized));
    }

    #[test]
    fn other_failures_keep_their_status() {
        assert_eq!(check_status(404), Err(ApiError::Status(404)));
        assert_eq!(check_status(500), Err(ApiError::Status(500)));
    }

    #[test]
    fn bearer_header_wraps_the_raw_token() {
        assert_eq!(bearer_header("abc123"), "Bearer abc123");
    }

    #[test]
    fn device_array_decodes() {
        let devices: Vec<Device> =
            decode(r#"[{"id":1,"name":"Uno","port":"/dev/ttyUSB0"}]"#).unwrap();
        assert_eq!(
            devices,
            vec![Device {
                id: 1,
                name: "Uno".to_string(),
                port: "/dev/ttyUSB0".to_string(),
            }]
        );
    }

    #[test]
    fn mapping_array_decodes_in_order() {
        let mappings: Vec<Mapping> = decode(
            r#"[{"controller_button":"A","arduino_pin":"1"},{"controller_button":"B","arduino_pin":"2"}]"#,
        )
        .unwrap();
        assert_eq!(mappings[0].controller_button, "A");
        assert_eq!(mappings[1].arduino_pin, "2");
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let response: LoginResponse =
            decode(r#"{"access_token":"abc123","token_type":"bearer"}"#).unwrap();
        assert_eq!(response.access_token, "abc123");
    }

    #[test]
    fn malformed_payload_reports_decode() {
        let result: Result<Vec<Device>, ApiError> = decode("not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
