//! StationRequest

use serde::Deserialize;

/// `POST /stations` 请求体
#[derive(Debug, Clone, Deserialize)]
pub struct StationRequest {
    pub name: String,
}
