use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 频道信息（cid 表），列名在查询中映射为对外字段名
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub channel_name: String,
    pub channel_link: String,
}
