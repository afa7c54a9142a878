use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 难度等级选项
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Level {
    pub level: String,
}
