use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use anyhow::Result;

use super::query_builder::ActivityQueryBuilder;
use crate::models::{Activity, Channel, Feedback, FilterColumn, Level, SearchFilters};

/// 数据库仓库接口
#[async_trait]
pub trait ContentRepository: Send + Sync {
    // 检索操作
    async fn search_activities(&self, filters: &SearchFilters) -> Result<(Vec<Activity>, i64)>;

    // 下拉选项数据
    async fn distinct_values(&self, column: FilterColumn) -> Result<Vec<String>>;
    async fn get_levels(&self) -> Result<Vec<Level>>;
    async fn get_channels(&self) -> Result<Vec<Channel>>;
    async fn get_channel_name(&self, id: i64) -> Result<Option<String>>;

    // 反馈
    async fn insert_feedback(&self, feedback: &Feedback) -> Result<()>;

    // 数据摄取
    async fn upsert_channel(&self, cid: &str, cname: &str, clink: &str) -> Result<i64>;
    async fn insert_activity(&self, activity: &Activity) -> Result<bool>;
    async fn insert_category_row(
        &self,
        id: &str,
        category_title: &str,
        players: &str,
        level: Option<&str>,
        channel_id: i64,
    ) -> Result<()>;
}

/// SQLite 数据库仓库实现
#[derive(Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for SqliteRepository {
    async fn search_activities(&self, filters: &SearchFilters) -> Result<(Vec<Activity>, i64)> {
        let mut select = ActivityQueryBuilder::select(filters);
        let activities = select
            .build_query_as::<Activity>()
            .fetch_all(&self.pool)
            .await?;

        let mut count = ActivityQueryBuilder::count(filters);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok((activities, total))
    }

    async fn distinct_values(&self, column: FilterColumn) -> Result<Vec<String>> {
        // 列名来自封闭的枚举，拼接是安全的
        let query = format!(
            "SELECT DISTINCT {col} FROM category \
             WHERE {col} IS NOT NULL AND {col} != '' \
             ORDER BY {col} ASC",
            col = column.as_str()
        );

        let values = sqlx::query_scalar::<_, String>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(values)
    }

    async fn get_levels(&self) -> Result<Vec<Level>> {
        let levels = sqlx::query_as::<_, Level>(
            "SELECT DISTINCT level FROM category WHERE level IS NOT NULL AND level != ''",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(levels)
    }

    async fn get_channels(&self) -> Result<Vec<Channel>> {
        let channels = sqlx::query_as::<_, Channel>(
            "SELECT id, COALESCE(cname, '') AS channel_name, COALESCE(clink, '') AS channel_link \
             FROM cid ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(channels)
    }

    async fn get_channel_name(&self, id: i64) -> Result<Option<String>> {
        let name = sqlx::query_scalar::<_, Option<String>>("SELECT cname FROM cid WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(name.flatten())
    }

    async fn insert_feedback(&self, feedback: &Feedback) -> Result<()> {
        let id = uuid::Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO feedback (id, name, email, category, message) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.category)
        .bind(&feedback.message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_channel(&self, cid: &str, cname: &str, clink: &str) -> Result<i64> {
        sqlx::query("INSERT INTO cid (cid, cname, clink) VALUES (?, ?, ?) ON CONFLICT(cid) DO NOTHING")
            .bind(cid)
            .bind(cname)
            .bind(clink)
            .execute(&self.pool)
            .await?;

        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM cid WHERE cid = ?")
            .bind(cid)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn insert_activity(&self, activity: &Activity) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO contents (ID, title, upload_date, video_url, view_count, like_count, duration, channel_category) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) ON CONFLICT(ID) DO NOTHING",
        )
        .bind(&activity.id)
        .bind(&activity.title)
        .bind(&activity.upload_date)
        .bind(&activity.video_url)
        .bind(activity.view_count)
        .bind(activity.like_count)
        .bind(&activity.duration)
        .bind(activity.channel_category)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_category_row(
        &self,
        id: &str,
        category_title: &str,
        players: &str,
        level: Option<&str>,
        channel_id: i64,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO category (ID, category_title, players, level, channel_brand_category) \
             VALUES (?, ?, ?, ?, ?) ON CONFLICT(ID) DO NOTHING",
        )
        .bind(id)
        .bind(category_title)
        .bind(players)
        .bind(level)
        .bind(channel_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
