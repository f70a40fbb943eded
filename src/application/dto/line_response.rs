//! LineResponse / LineWithStationResponse
//!
//! `stations` 为有序二元组：下标 0 为上行终点站，下标 1 为下行终点站

use serde::{Deserialize, Serialize};

use super::StationResponse;
use crate::domain::Line;

fn endpoint_responses(line: &Line) -> Vec<StationResponse> {
    vec![
        StationResponse::from_entity(line.up_endpoint()),
        StationResponse::from_entity(line.down_endpoint()),
    ]
}

/// 创建线路的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
}

impl LineResponse {
    pub fn from_entity(line: &Line) -> Self {
        Self {
            id: line.id().value(),
            name: line.name().as_str().to_string(),
            color: line.color().as_str().to_string(),
            stations: endpoint_responses(line),
        }
    }
}

/// 查询线路的响应（列表与详情）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWithStationResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
}

impl LineWithStationResponse {
    pub fn from_entity(line: &Line) -> Self {
        Self {
            id: line.id().value(),
            name: line.name().as_str().to_string(),
            color: line.color().as_str().to_string(),
            stations: endpoint_responses(line),
        }
    }
}
