//! Line Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{LineColor, LineId, LineName};
use crate::domain::station::{Station, StationId};

/// 尚未持久化的线路
///
/// 终点站仅以 id 引用，由应用层在保存前确认其存在
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: LineName,
    pub color: LineColor,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
}

/// Line 聚合根
///
/// 不变量:
/// - 恰好有两个终点站：上行 (up) 与下行 (down)
/// - 终点站在创建时确定，之后不可单独置空或替换
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: LineName,
    color: LineColor,
    up_endpoint: Station,
    down_endpoint: Station,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    pub fn new(
        id: LineId,
        name: LineName,
        color: LineColor,
        up_endpoint: Station,
        down_endpoint: Station,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            up_endpoint,
            down_endpoint,
            created_at,
            updated_at,
        }
    }

    /// 修改线路名称与颜色，终点站保持不变
    pub fn update(&mut self, name: LineName, color: LineColor) {
        self.name = name;
        self.color = color;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn color(&self) -> &LineColor {
        &self.color
    }

    pub fn up_endpoint(&self) -> &Station {
        &self.up_endpoint
    }

    pub fn down_endpoint(&self) -> &Station {
        &self.down_endpoint
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Line {}
