//! StationResponse

use serde::{Deserialize, Serialize};

use crate::domain::Station;

/// 站点响应 `{id, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
}

impl StationResponse {
    pub fn from_entity(station: &Station) -> Self {
        Self {
            id: station.id().value(),
            name: station.name().as_str().to_string(),
        }
    }
}
