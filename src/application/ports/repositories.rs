//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Line, LineId, NewLine, NewStation, Station, StationId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// 违反外键约束（被引用的实体不存在或仍被引用）
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Station Repository
// ============================================================================

/// Station Repository Port
#[async_trait]
pub trait StationRepositoryPort: Send + Sync {
    /// 保存站点，返回分配了 id 的实体
    async fn save(&self, station: &NewStation) -> Result<Station, RepositoryError>;

    /// 根据 ID 查找站点
    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError>;

    /// 获取所有站点（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError>;

    /// 删除站点，返回是否确实删除了记录
    async fn delete(&self, id: StationId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Line Repository
// ============================================================================

/// Line Repository Port
///
/// 读取的 Line 总是带有完整的上行/下行终点站
#[async_trait]
pub trait LineRepositoryPort: Send + Sync {
    /// 保存线路，返回分配了 id 的聚合
    async fn save(&self, line: &NewLine) -> Result<Line, RepositoryError>;

    /// 根据 ID 查找线路
    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError>;

    /// 获取所有线路（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError>;

    /// 更新线路名称与颜色
    async fn update(&self, line: &Line) -> Result<(), RepositoryError>;

    /// 删除线路，返回是否确实删除了记录
    async fn delete(&self, id: LineId) -> Result<bool, RepositoryError>;

    /// 是否存在以该站点为终点站的线路
    async fn exists_by_station(&self, station_id: StationId) -> Result<bool, RepositoryError>;
}
