//! Line Context - 地铁线路
//!
//! 职责:
//! - 线路聚合（名称、颜色、上行/下行终点站）
//! - 线路名称与颜色校验

mod aggregate;
mod value_objects;

pub use aggregate::{Line, NewLine};
pub use value_objects::{LineColor, LineId, LineName};
