//! Memory Layer - 内存仓储实现
//!
//! 不依赖数据库的 StationRepository / LineRepository，用于测试和 `database.backend = "memory"`

mod line_repo;
mod station_repo;

pub use line_repo::InMemoryLineRepository;
pub use station_repo::InMemoryStationRepository;
