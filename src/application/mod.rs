//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 仓储端口定义
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - dto: 请求/响应 DTO
//! - services: 面向 HTTP 层的 StationService / LineService
//! - error: 应用层错误定义

pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use dto::{
    LineRequest, LineResponse, LineUpdateRequest, LineWithStationResponse, StationRequest,
    StationResponse,
};
pub use error::ApplicationError;
pub use ports::{LineRepositoryPort, RepositoryError, StationRepositoryPort};
pub use services::{LineService, StationService};
