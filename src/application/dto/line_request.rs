//! LineRequest

use serde::Deserialize;

/// `POST /lines` 请求体
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
}

/// `PUT /lines/{id}` 请求体
#[derive(Debug, Clone, Deserialize)]
pub struct LineUpdateRequest {
    pub name: String,
    pub color: String,
}
