//! Line HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{LineRequest, LineUpdateRequest, LineWithStationResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建线路，返回 201 与 `Location: /lines/{id}`
pub async fn create_line(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let line = state.line_service.save_line(request).await?;

    let location = format!("/lines/{}", line.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(line)))
}

/// 获取线路列表
pub async fn get_lines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LineWithStationResponse>>, ApiError> {
    let lines = state.line_service.get_lines().await?;
    Ok(Json(lines))
}

/// 获取线路详情
pub async fn get_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LineWithStationResponse>, ApiError> {
    let line = state.line_service.get_line(id).await?;
    Ok(Json(line))
}

/// 修改线路名称与颜色
pub async fn update_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<LineUpdateRequest>, JsonRejection>,
) -> Result<Json<LineWithStationResponse>, ApiError> {
    let Json(request) = payload?;
    let line = state.line_service.update_line(id, request).await?;
    Ok(Json(line))
}

/// 删除线路
pub async fn delete_line(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.line_service.delete_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
