//! Station HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{StationRequest, StationResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建站点
pub async fn create_station(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let station = state.station_service.save_station(request).await?;

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(station),
    ))
}

/// 获取站点列表
pub async fn show_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state.station_service.find_all_stations().await?;
    Ok(Json(stations))
}

/// 删除站点（不存在时同样返回 204）
pub async fn delete_station(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.station_service.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
