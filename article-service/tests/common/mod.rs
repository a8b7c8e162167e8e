#![allow(dead_code)]

use article_service::config::{
    ArticleConfig, MongoConfig, ObservabilityConfig, StoreBackend, StoreConfig,
};
use article_service::models::{Article, ArticleFields};
use article_service::services::{ArticleStore, InMemoryArticleStore};
use article_service::startup::{build_router, AppState, Application};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const MONGODB_URI: &str = "mongodb://localhost:27017";

/// Router wired to a fresh in-memory store, plus a handle to inspect it.
pub fn memory_app() -> (Router, InMemoryArticleStore) {
    let store = InMemoryArticleStore::new();
    let router = build_router(AppState::new(Arc::new(store.clone())));
    (router, store)
}

/// Send one request through the router and decode the JSON body, if any.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let (status, _, json) = send_request(app, builder.body(body).unwrap()).await;
    (status, json)
}

/// Send a prebuilt request; returns status, `Content-Type` and decoded JSON body.
pub async fn send_request(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, content_type, json)
}

/// Store whose every call fails the way a dropped connection would.
pub struct UnreachableStore;

#[async_trait]
impl ArticleStore for UnreachableStore {
    async fn insert(&self, _fields: ArticleFields) -> Result<ObjectId, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Article>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn update_by_id(&self, _id: ObjectId, _fields: ArticleFields) -> Result<bool, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("connection refused")))
    }
}

pub fn test_config(backend: StoreBackend, database: &str) -> ArticleConfig {
    ArticleConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        mongodb: MongoConfig {
            uri: MONGODB_URI.to_string(),
            database: database.to_string(),
            collection: "articles".to_string(),
        },
        store: StoreConfig { backend },
        observability: ObservabilityConfig {
            otlp_endpoint: None,
        },
    }
}

/// A running `Application` reachable over real HTTP.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db_name: String,
    pub store: Arc<dyn ArticleStore>,
}

impl TestApp {
    pub async fn spawn(backend: StoreBackend) -> Self {
        let db_name = format!("article_test_{}", Uuid::new_v4().simple());
        let config = test_config(backend, &db_name);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db_name,
            store,
        }
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        if let Ok(client) = mongodb::Client::with_uri_str(MONGODB_URI).await {
            let _ = client.database(&self.db_name).drop(None).await;
        }
    }
}
