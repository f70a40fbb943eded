//! Line Context - Value Objects

use serde::{Deserialize, Serialize};

/// 线路唯一标识（由持久化层分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(i64);

impl LineId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for LineId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineName(String);

impl LineName {
    pub const MAX_CHARS: usize = 20;

    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err("线路名称不能为空");
        }
        if name.chars().count() > Self::MAX_CHARS {
            return Err("线路名称长度不能超过20字符");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 线路颜色（如 "bg-red-600"），原样保存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor(String);

impl LineColor {
    pub const MAX_CHARS: usize = 20;

    pub fn new(color: impl Into<String>) -> Result<Self, &'static str> {
        let color = color.into().trim().to_string();
        if color.is_empty() {
            return Err("线路颜色不能为空");
        }
        if color.chars().count() > Self::MAX_CHARS {
            return Err("线路颜色长度不能超过20字符");
        }
        Ok(Self(color))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
