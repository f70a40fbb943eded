//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod line_commands;
mod station_commands;

pub mod handlers;

pub use line_commands::*;
pub use station_commands::*;
