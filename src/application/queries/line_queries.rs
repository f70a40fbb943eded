//! Line Queries

/// 获取线路详情查询
#[derive(Debug, Clone)]
pub struct GetLine {
    pub line_id: i64,
}

/// 列出所有线路查询
#[derive(Debug, Clone)]
pub struct ListLines;
