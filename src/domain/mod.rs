//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Station Context: 地铁站
//! - Line Context: 地铁线路（引用两个终点站）

pub mod line;
pub mod station;

pub use line::{Line, LineColor, LineId, LineName, NewLine};
pub use station::{NewStation, Station, StationId, StationName};
