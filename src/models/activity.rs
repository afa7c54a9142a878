use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 数据库 contents 表的一行（未经显示转换的原始数据）
#[derive(Debug, Clone, FromRow)]
pub struct Activity {
    #[sqlx(rename = "ID")]
    pub id: String,
    pub title: String,
    pub upload_date: String,
    pub video_url: String,
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
    pub duration: Option<String>,
    pub channel_category: Option<i64>,
}

/// 面向前端的展示记录：嵌入链接、格式化日期、已解析的频道名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub title: String,
    pub video_url: String,
    pub upload_date: String,
    pub view_count: i64,
    pub like_count: i64,
    pub duration: String,
    pub channel_category: String,
}
