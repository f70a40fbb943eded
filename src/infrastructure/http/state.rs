//! Application State
//!
//! 包含 HTTP 层使用的应用服务

use std::sync::Arc;

use crate::application::{
    LineRepositoryPort, LineService, StationRepositoryPort, StationService,
};

/// 应用状态
pub struct AppState {
    pub station_service: StationService,
    pub line_service: LineService,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            station_service: StationService::new(station_repo.clone(), line_repo.clone()),
            line_service: LineService::new(station_repo, line_repo),
        }
    }
}
