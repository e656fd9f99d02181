// Shared helpers for the integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use ecotech_site::contact::FormRelayClient;
use ecotech_site::{create_router, AppState, SiteConfig};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Requests the fake relay has received
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Start a throwaway form relay on an ephemeral port that answers every
/// submission with `status` and `body`. Returns its endpoint URL.
pub async fn spawn_relay(status: StatusCode, body: &'static str) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    async fn accept(
        State((status, body, received)): State<(StatusCode, &'static str, Received)>,
        Json(payload): Json<Value>,
    ) -> impl IntoResponse {
        received.lock().unwrap().push(payload);
        (status, body)
    }

    let relay = Router::new()
        .route("/ajax/inbox", post(accept))
        .with_state((status, body, received.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, relay).await.unwrap();
    });

    (format!("http://{}/ajax/inbox", addr), received)
}

/// An endpoint nothing is listening on
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/ajax/inbox", addr)
}

pub fn test_app(relay_url: Option<String>) -> Router {
    let config = SiteConfig {
        contact_relay_url: relay_url.clone(),
        ..SiteConfig::default()
    };
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let state = AppState::with_relay(config, FormRelayClient::with_client(client, relay_url));
    create_router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

pub async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}
