//! Application Services
//!
//! 面向 HTTP 层的用例入口：组合命令/查询处理器并完成实体到 DTO 的转换

mod line_service;
mod station_service;

pub use line_service::LineService;
pub use station_service::StationService;
