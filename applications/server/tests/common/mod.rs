/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use roster_core::UserStore;
use roster_server::{config::HttpSettings, create_router, router::App, state::AppState};
use serde_json::Value;
use tower::util::ServiceExt;

/// Build the full router over an empty store
///
/// The state is returned too so tests can inspect the store directly.
pub fn create_test_app() -> (App, AppState) {
    create_test_app_with(HttpSettings::default())
}

pub fn create_test_app_with(http: HttpSettings) -> (App, AppState) {
    let app_state = AppState::new(UserStore::new());
    let app = create_router(app_state.clone(), &http);
    (app, app_state)
}

/// Send a request with an optional JSON body and parse the JSON response
pub async fn send_json(
    app: &App,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send(app, request).await
}

/// Send a raw request and parse the JSON response
pub async fn send(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Send a raw request and return the body bytes
pub async fn send_raw(app: &App, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

/// Create a user through the API and return its JSON representation
pub async fn create_user(app: &App, name: &str, email: &str) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/users",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["data"].clone()
}

/// Test user fixtures
pub mod fixtures {
    pub const ANN_NAME: &str = "Ann";
    pub const ANN_EMAIL: &str = "ann@x.com";

    pub const BOB_NAME: &str = "Bob";
    pub const BOB_EMAIL: &str = "bob@x.com";
}
