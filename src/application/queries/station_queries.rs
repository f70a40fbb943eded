//! Station Queries

/// 列出所有站点查询
#[derive(Debug, Clone)]
pub struct ListStations;
