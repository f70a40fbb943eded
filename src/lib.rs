//! Subway - 地铁站点与线路管理服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Station Context: 地铁站
//! - Line Context: 地铁线路及其上行/下行终点站
//!
//! 应用层 (application/):
//! - Ports: 仓储端口（StationRepository, LineRepository）
//! - Commands / Queries: CQRS 处理器
//! - DTO: StationResponse, LineResponse, LineWithStationResponse
//! - Services: StationService, LineService
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储
//! - Memory: 内存仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
