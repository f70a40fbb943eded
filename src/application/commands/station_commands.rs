//! Station Commands

/// 创建站点命令
#[derive(Debug, Clone)]
pub struct CreateStation {
    pub name: String,
}

/// 删除站点命令
#[derive(Debug, Clone)]
pub struct DeleteStation {
    pub station_id: i64,
}
