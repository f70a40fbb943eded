//! Station Context - 地铁站
//!
//! 职责:
//! - 站点实体（仅包含标识与名称）
//! - 站点名称校验

mod entity;
mod value_objects;

pub use entity::{NewStation, Station};
pub use value_objects::{StationId, StationName};
