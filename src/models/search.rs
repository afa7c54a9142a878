use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ActivityRecord;

/// 搜索条件（后端内部表示，空字符串已归一化为 None）
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub category: Option<String>,
    pub players: Option<String>,
    pub level: Option<String>,
    pub channel: Option<i64>,
    pub sort: SortKey,
    pub limit: i64,
    pub offset: i64,
}

impl SearchFilters {
    /// category 表上的筛选条件是否有任何一个被启用
    pub fn has_category_filters(&self) -> bool {
        self.category.is_some()
            || self.players.is_some()
            || self.level.is_some()
            || self.channel.is_some()
    }

    /// 仅按标题检索、不经 category 表过滤的快捷路径
    pub fn is_title_only(&self) -> bool {
        self.query.is_some() && !self.has_category_filters()
    }
}

/// 排序键白名单，未知输入回退为按上传日期
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    UploadDate,
    ViewCount,
    LikeCount,
}

impl SortKey {
    /// 解析请求参数；无法识别的值回退为 UploadDate
    pub fn parse(value: &str) -> Self {
        match value {
            "view_count" => SortKey::ViewCount,
            "like_count" => SortKey::LikeCount,
            _ => SortKey::UploadDate,
        }
    }

    /// contents 表中对应的列名
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::UploadDate => "upload_date",
            SortKey::ViewCount => "view_count",
            SortKey::LikeCount => "like_count",
        }
    }
}

/// /get_unique_values 允许查询的列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    CategoryTitle,
    Players,
}

impl FilterColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterColumn::CategoryTitle => "category_title",
            FilterColumn::Players => "players",
        }
    }
}

impl FromStr for FilterColumn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category_title" => Ok(FilterColumn::CategoryTitle),
            "players" => Ok(FilterColumn::Players),
            _ => Err(()),
        }
    }
}

/// /search 的响应体，字段名即线上契约
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub activities: Vec<ActivityRecord>,
    pub total: i64,
    pub current_display_count: i64,
}
