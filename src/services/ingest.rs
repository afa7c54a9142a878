use serde::Serialize;
use thiserror::Error;

use crate::database::{ContentRepository, SqliteRepository};
use crate::external::{format_duration, YoutubeClient};
use crate::models::Activity;
use crate::services::categorizer::{assign_category, extract_players};

/// 取り込み処理のエラー
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("YouTube API key is not configured")]
    NotConfigured,
    #[error("channel not found for handle: {0}")]
    ChannelNotFound(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 取り込み結果の概要
#[derive(Debug, Serialize)]
pub struct IngestSummary {
    pub channel_name: String,
    pub videos_found: usize,
    pub videos_added: usize,
}

/// チャンネル単位の取り込み
///
/// ハンドル解決 → チャンネル登録 → 動画一覧のページング取得 →
/// 統計情報の取得 → contents / category への挿入（既存IDはスキップ）。
pub struct IngestService {
    youtube: YoutubeClient,
    repository: SqliteRepository,
}

impl IngestService {
    pub fn new(youtube: YoutubeClient, repository: SqliteRepository) -> Self {
        Self { youtube, repository }
    }

    pub fn is_available(&self) -> bool {
        self.youtube.is_available()
    }

    pub async fn sync_channel(&self, handle: &str) -> Result<IngestSummary, IngestError> {
        if !self.youtube.is_available() {
            return Err(IngestError::NotConfigured);
        }

        let channel_id = self
            .youtube
            .channel_id_for_handle(handle)
            .await?
            .ok_or_else(|| IngestError::ChannelNotFound(handle.to_string()))?;

        let channel_name = self
            .youtube
            .channel_title(&channel_id)
            .await?
            .unwrap_or_else(|| handle.to_string());

        let channel_link = format!("https://www.youtube.com/channel/{}", channel_id);
        let db_channel_id = self
            .repository
            .upsert_channel(&channel_id, &channel_name, &channel_link)
            .await?;

        tracing::info!("Syncing channel '{}' ({})", channel_name, channel_id);

        let mut videos_found = 0;
        let mut videos_added = 0;
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .youtube
                .channel_videos(&channel_id, page_token.as_deref())
                .await?;

            let mut snippets = Vec::new();
            for item in page.items {
                if let Some(video_id) = item.id.video_id {
                    snippets.push((video_id, item.snippet));
                }
            }
            videos_found += snippets.len();

            let ids: Vec<String> = snippets.iter().map(|(id, _)| id.clone()).collect();
            let details = self.youtube.video_details(&ids).await?;

            for (video_id, snippet) in snippets {
                let detail = details.iter().find(|d| d.id == video_id);

                let view_count = detail
                    .and_then(|d| d.statistics.as_ref())
                    .and_then(|s| s.view_count.as_deref())
                    .and_then(|v| v.parse::<i64>().ok());
                let like_count = detail
                    .and_then(|d| d.statistics.as_ref())
                    .and_then(|s| s.like_count.as_deref())
                    .and_then(|v| v.parse::<i64>().ok());
                let duration = detail
                    .and_then(|d| d.content_details.as_ref())
                    .and_then(|c| c.duration.as_deref())
                    .map(format_duration);

                let activity = Activity {
                    id: video_id.clone(),
                    title: snippet.title.clone(),
                    upload_date: snippet.published_at.clone(),
                    video_url: format!("https://www.youtube.com/watch?v={}", video_id),
                    view_count,
                    like_count,
                    duration,
                    channel_category: Some(db_channel_id),
                };

                if self.repository.insert_activity(&activity).await? {
                    self.repository
                        .insert_category_row(
                            &video_id,
                            assign_category(&snippet.title),
                            &extract_players(&snippet.title),
                            None,
                            db_channel_id,
                        )
                        .await?;
                    videos_added += 1;
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        tracing::info!(
            "Channel '{}' synced: {} videos found, {} added",
            channel_name,
            videos_found,
            videos_added
        );

        Ok(IngestSummary {
            channel_name,
            videos_found,
            videos_added,
        })
    }
}
