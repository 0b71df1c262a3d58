#![allow(dead_code)]

use auth_edge::db::{AuthStore, SqlitePool};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Tables as an external deployment would provision them.
const TEST_SCHEMA: &[&str] = &[
    "CREATE TABLE auth (email TEXT, pass TEXT)",
    "CREATE TABLE acessos (id INTEGER PRIMARY KEY, ip TEXT, hits INTEGER, score REAL, raw BLOB)",
];

static SEQ: AtomicU64 = AtomicU64::new(0);

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    path: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_schema(TEST_SCHEMA).await
    }

    pub async fn spawn_with_schema(schema: &[&str]) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "auth-edge-test-{}-{}-{}.sqlite",
            std::process::id(),
            nanos,
            SEQ.fetch_add(1, Ordering::Relaxed)
        ));

        let database_url = format!("sqlite:{}", path.display());
        let pool = auth_edge::db::connect(&database_url)
            .await
            .expect("failed to open test database");
        for stmt in schema {
            sqlx::query(stmt)
                .execute(&pool)
                .await
                .expect("failed to create test table");
        }

        let state = auth_edge::EdgeState::new(AuthStore::new(pool.clone()));
        let app = auth_edge::edge_router(state);
        Self { app, pool, path }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn dashboard(&self, authorization: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("GET")
                .uri("/dashboard")
                .header("authorization", authorization)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_millis() as i64
}
