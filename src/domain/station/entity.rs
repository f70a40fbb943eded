//! Station Context - Entity

use chrono::{DateTime, Utc};

use super::{StationId, StationName};

/// 尚未持久化的站点
#[derive(Debug, Clone)]
pub struct NewStation {
    pub name: StationName,
}

impl NewStation {
    pub fn new(name: StationName) -> Self {
        Self { name }
    }
}

/// 已持久化的站点
///
/// 相等性仅由 id 决定
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: StationName,
    created_at: DateTime<Utc>,
}

impl Station {
    pub fn new(id: StationId, name: StationName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}
