//! HTTP 验收测试辅助

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt;

use super::{create_routes, AppState};
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLineRepository, SqliteStationRepository,
};

/// 基于内存 SQLite 的完整路由
pub(crate) struct TestApp {
    router: Router,
}

impl TestApp {
    pub(crate) async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            Arc::new(SqliteStationRepository::new(pool.clone())),
            Arc::new(SqliteLineRepository::new(pool)),
        );

        Self {
            router: create_routes().with_state(Arc::new(state)),
        }
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, headers, body)
    }

    pub(crate) async fn get(&self, uri: &str) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub(crate) async fn post(&self, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub(crate) async fn delete(&self, uri: &str) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// 创建站点并返回其 id
    pub(crate) async fn create_station(&self, name: &str) -> i64 {
        let (status, _, body) = self
            .post("/stations", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    /// 站点列表中的名称
    pub(crate) async fn station_names(&self) -> Vec<String> {
        let (status, _, body) = self.get("/stations").await;
        assert_eq!(status, StatusCode::OK);
        body.as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    }
}
