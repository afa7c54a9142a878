use chrono::NaiveDateTime;
use moka::future::Cache;
use std::time::Duration;
use url::Url;

use crate::database::{ContentRepository, SqliteRepository};
use crate::models::{Activity, ActivityRecord};

/// 频道名缓存的有效期
const CHANNEL_NAME_TTL: Duration = Duration::from_secs(5 * 60);

/// 日本語形式の日時フォーマット（例: 2023年11月22日11時00分）
const JP_DATE_FORMAT: &str = "%Y年%m月%d日%H時%M分";
const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 把 contents 表的原始行转换成前端展示记录
///
/// 转换内容：watch 链接 → 嵌入链接、上传日期统一为日文格式、
/// channel_category 的数字 ID 解析为频道名（带缓存）。
pub struct ActivityConverter {
    repository: SqliteRepository,
    channel_names: Cache<i64, Option<String>>,
}

impl ActivityConverter {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository,
            channel_names: Cache::builder()
                .max_capacity(256)
                .time_to_live(CHANNEL_NAME_TTL)
                .build(),
        }
    }

    /// 日付が解釈できない行は落とす
    pub async fn convert_all(&self, activities: Vec<Activity>) -> Vec<ActivityRecord> {
        let mut records = Vec::with_capacity(activities.len());
        for activity in activities {
            if let Some(record) = self.convert(activity).await {
                records.push(record);
            }
        }
        records
    }

    async fn convert(&self, activity: Activity) -> Option<ActivityRecord> {
        let upload_date = match format_upload_date(&activity.upload_date) {
            Some(date) => date,
            None => {
                tracing::error!("Unsupported date format: {}", activity.upload_date);
                return None;
            }
        };

        let channel_category = match activity.channel_category {
            Some(id) => self
                .channel_name(id)
                .await
                .unwrap_or_else(|| "N/A".to_string()),
            None => "N/A".to_string(),
        };

        Some(ActivityRecord {
            title: activity.title,
            video_url: to_embed_url(&activity.video_url),
            upload_date,
            view_count: activity.view_count.unwrap_or(0),
            like_count: activity.like_count.unwrap_or(0),
            duration: activity.duration.unwrap_or_else(|| "N/A".to_string()),
            channel_category,
        })
    }

    async fn channel_name(&self, id: i64) -> Option<String> {
        self.channel_names
            .get_with(id, async {
                match self.repository.get_channel_name(id).await {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::error!("Channel name lookup failed for {}: {}", id, e);
                        None
                    }
                }
            })
            .await
    }
}

/// YouTube の watch リンクから VIDEO_ID を抜き出して埋め込みリンクへ。
/// それ以外の形式はそのまま返す。
pub fn to_embed_url(video_url: &str) -> String {
    if let Ok(url) = Url::parse(video_url) {
        if url.path() == "/watch" {
            if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
                return format!("https://www.youtube.com/embed/{}", id);
            }
        }
    }
    video_url.to_string()
}

/// 上传日期统一为日文格式。支持 ISO（可带 Z 后缀）与日文两种输入。
pub fn format_upload_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, JP_DATE_FORMAT))
        .ok()?;
    Some(parsed.format(JP_DATE_FORMAT).to_string())
}
