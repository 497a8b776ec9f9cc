#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use heroes_api::{app, connect_in_memory, init_schema, AppState, Backend, Gateway};
use serde_json::Value;
use tower::ServiceExt;

pub async fn gateway() -> Gateway {
    let pool = connect_in_memory().await.expect("in-memory pool");
    init_schema(&pool, Backend::Sqlite).await.expect("schema");
    Gateway::new(pool)
}

pub struct TestApp {
    pub gateway: Gateway,
    router: Router,
}

pub async fn spawn() -> TestApp {
    let gateway = gateway().await;
    let router = app(AppState::new(gateway.clone()), 64 * 1024);
    TestApp { gateway, router }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PATCH", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }
}
