//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的集中转换

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式，errno 与 HTTP 状态码一致
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: u16,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            errno: status.as_u16(),
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// 请求体在解析前被拒绝（缺少 Content-Type、超出大小限制等），沿用原状态码
    Rejected(StatusCode, String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Rejected(status, _) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Rejected(_, msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.message();

        match &self {
            ApiError::NotFound(_) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource not found")
            }
            ApiError::BadRequest(_) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Bad request")
            }
            ApiError::Conflict(_) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource conflict")
            }
            ApiError::Rejected(..) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Request body rejected")
            }
            ApiError::Internal(_) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error")
            }
        }

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::Conflict(msg) => ApiError::Conflict(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 请求体绑定失败
///
/// 缺少字段或类型错误 (422) 与语法错误统一为 400，其余拒绝保留原状态码
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(rejection.body_text())
            }
            status => ApiError::Rejected(status, rejection.body_text()),
        }
    }
}
