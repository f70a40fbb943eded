//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod line_queries;
mod station_queries;

pub mod handlers;

pub use line_queries::*;
pub use station_queries::*;
