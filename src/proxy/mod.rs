//! Upstream API forwarding.
//!
//! The browser talks to a same-origin API; these handlers relay `/login`,
//! `/arduinos` and `/mappings` to the BlueLink backend named in the
//! configuration without touching the payloads. Auth decisions stay
//! upstream - the `Authorization` header is copied through and whatever
//! status the backend answers comes back verbatim.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tracing::warn;
use url::Url;

/// Shared forwarding state: one pooled client plus the upstream root.
#[derive(Clone)]
pub struct UpstreamState {
    client: reqwest::Client,
    base_url: Url,
}

impl UpstreamState {
    pub fn new(base_url: String) -> anyhow::Result<Self> {
        let base_url = Url::parse(&base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Full upstream URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// The three forwarded API routes, ready to merge into the app router.
pub fn api_router(state: UpstreamState) -> axum::Router {
    axum::Router::new()
        .route("/login", post(login_handler))
        .route("/arduinos", get(arduinos_handler))
        .route("/mappings", get(mappings_handler))
        .with_state(state)
}

/// POST /login - credential exchange, no auth header yet
pub async fn login_handler(State(state): State<UpstreamState>, body: Bytes) -> Response {
    forward_post(&state, "login", body).await
}

/// GET /arduinos - connected device list
pub async fn arduinos_handler(State(state): State<UpstreamState>, headers: HeaderMap) -> Response {
    forward_get(&state, "arduinos", bearer(&headers)).await
}

/// GET /mappings - controller button to pin mappings
pub async fn mappings_handler(State(state): State<UpstreamState>, headers: HeaderMap) -> Response {
    forward_get(&state, "mappings", bearer(&headers)).await
}

/// The `Authorization` header as sent by the browser, if any.
fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn forward_get(state: &UpstreamState, path: &str, auth: Option<String>) -> Response {
    let mut request = state.client.get(state.endpoint(path));
    if let Some(auth) = auth {
        request = request.header("authorization", auth);
    }
    relay(path, request).await
}

async fn forward_post(state: &UpstreamState, path: &str, body: Bytes) -> Response {
    let request = state
        .client
        .post(state.endpoint(path))
        .header("content-type", "application/json")
        .body(body);
    relay(path, request).await
}

/// Send the upstream request and mirror status, content type and body back.
async fn relay(path: &str, request: reqwest::RequestBuilder) -> Response {
    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(err) => {
            warn!("upstream request to /{path} failed: {err}");
            return (StatusCode::BAD_GATEWAY, "upstream unreachable").into_response();
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let body = match upstream.bytes().await {
        Ok(body) => body,
        Err(err) => {
            warn!("upstream body from /{path} failed: {err}");
            return (StatusCode::BAD_GATEWAY, "upstream body unreadable").into_response();
        }
    };

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }
    response
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn router_for(upstream: &MockServer) -> axum::Router {
        api_router(UpstreamState::new(upstream.uri()).unwrap())
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn login_forwards_credentials_and_returns_token() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "password": "secret",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "abc123" })),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let response = router_for(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"alice","password":"secret"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("abc123"));
    }

    #[tokio::test]
    async fn login_rejection_passes_through_unchanged() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "detail": "Invalid credentials" })),
            )
            .mount(&upstream)
            .await;

        let response = router_for(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"username":"alice","password":"wrong"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn device_fetch_carries_the_bearer_token_upstream() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/arduinos"))
            .and(header_matcher("authorization", "Bearer abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 1, "name": "Uno", "port": "/dev/ttyUSB0" },
            ])))
            .expect(1)
            .mount(&upstream)
            .await;

        let response = router_for(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .uri("/arduinos")
                    .header("authorization", "Bearer abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Uno"));
        assert!(body.contains("/dev/ttyUSB0"));
    }

    #[tokio::test]
    async fn mapping_fetch_passes_body_and_status_back() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mappings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "controller_button": "A", "arduino_pin": "1" },
                { "controller_button": "B", "arduino_pin": "2" },
            ])))
            .mount(&upstream)
            .await;

        let response = router_for(&upstream)
            .await
            .oneshot(
                Request::builder()
                    .uri("/mappings")
                    .header("authorization", "Bearer abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("controller_button"));
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_bad_gateway() {
        // Nothing listens on port 9; the connect fails immediately.
        let router = api_router(UpstreamState::new("http://127.0.0.1:9".to_string()).unwrap());

        let response = router
            .oneshot(Request::builder().uri("/arduinos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
