use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

lazy_static! {
    static ref ISO_DURATION_RE: Regex =
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").unwrap();
}

/// YouTube Data API v3 客户端
///
/// API キーは環境変数 YOUTUBE_API_KEY から。未設定の場合は
/// is_available() が false になるだけでエラーにはしない。
#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YoutubeClient {
    pub fn from_env() -> Self {
        Self::new(std::env::var("YOUTUBE_API_KEY").ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("YouTube API key is not configured"))
    }

    /// チャンネルハンドルからチャンネルIDを取得する
    pub async fn channel_id_for_handle(&self, handle: &str) -> Result<Option<String>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", handle),
                ("type", "channel"),
                ("key", self.key()?),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("YouTube API error: {}", response.status()));
        }

        let result: ChannelSearchResponse = response.json().await?;
        Ok(result
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id.channel_id))
    }

    /// チャンネルのブランディング設定からタイトルを取得
    pub async fn channel_title(&self, channel_id: &str) -> Result<Option<String>> {
        let url = format!("{}/channels", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "brandingSettings"),
                ("id", channel_id),
                ("key", self.key()?),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("YouTube API error: {}", response.status()));
        }

        let result: ChannelListResponse = response.json().await?;
        Ok(result
            .items
            .into_iter()
            .next()
            .and_then(|item| item.branding_settings.channel.title))
    }

    /// チャンネルの動画一覧を1ページ分取得
    pub async fn channel_videos(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> Result<VideoPage> {
        let url = format!("{}/search", self.base_url);
        let mut query = vec![
            ("part", "snippet"),
            ("channelId", channel_id),
            ("type", "video"),
            ("maxResults", "50"),
            ("key", self.key()?),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("YouTube API error: {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// 動画IDリストから統計情報と再生時間を取得
    pub async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetailsItem>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/videos", self.base_url);
        let ids = video_ids.join(",");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "statistics,contentDetails"),
                ("id", ids.as_str()),
                ("key", self.key()?),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("YouTube API error: {}", response.status()));
        }

        let result: VideoDetailsResponse = response.json().await?;
        Ok(result.items)
    }
}

/// ISO 8601 形式の再生時間を H:MM:SS に整形。解釈できなければ "N/A"。
pub fn format_duration(duration: &str) -> String {
    let caps = match ISO_DURATION_RE.captures(duration) {
        Some(caps) => caps,
        None => return "N/A".to_string(),
    };

    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return "N/A".to_string();
    }

    let part = |i: usize| -> u64 {
        caps.get(i)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0))
    };
    let total = part(1) * 3600 + part(2) * 60 + part(3);

    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[derive(Debug, Deserialize)]
struct ChannelSearchResponse {
    #[serde(default)]
    items: Vec<ChannelSearchItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelSearchItem {
    id: ChannelSearchId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSearchId {
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelListItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelListItem {
    branding_settings: BrandingSettings,
}

#[derive(Debug, Deserialize)]
struct BrandingSettings {
    channel: BrandingChannel,
}

#[derive(Debug, Deserialize)]
struct BrandingChannel {
    title: Option<String>,
}

/// 動画検索の1ページ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPage {
    #[serde(default)]
    pub items: Vec<VideoSearchItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoSearchItem {
    pub id: VideoSearchId,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
struct VideoDetailsResponse {
    #[serde(default)]
    items: Vec<VideoDetailsItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetailsItem {
    pub id: String,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    pub duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_duration("PT15M"), "0:15:00");
        assert_eq!(format_duration("PT0S"), "0:00:00");
        assert_eq!(format_duration("InvalidDuration"), "N/A");
    }

    #[test]
    fn test_format_duration_normalizes_overflow() {
        assert_eq!(format_duration("PT90S"), "0:01:30");
        assert_eq!(format_duration("PT75M"), "1:15:00");
    }

    #[test]
    fn test_bare_pt_is_invalid() {
        assert_eq!(format_duration("PT"), "N/A");
    }

    #[test]
    fn test_video_page_deserialization() {
        let json = r#"{
            "items": [
                {
                    "id": {"videoId": "video1"},
                    "snippet": {"title": "Test Video", "publishedAt": "2025-03-01T00:00:00Z"}
                }
            ],
            "nextPageToken": "abc"
        }"#;

        let page: VideoPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.video_id.as_deref(), Some("video1"));
        assert_eq!(page.items[0].snippet.title, "Test Video");
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_video_details_deserialization() {
        let json = r#"{
            "items": [
                {
                    "id": "video1",
                    "statistics": {"viewCount": "1000", "likeCount": "50"},
                    "contentDetails": {"duration": "PT10M"}
                }
            ]
        }"#;

        let result: VideoDetailsResponse = serde_json::from_str(json).unwrap();
        let item = &result.items[0];
        assert_eq!(item.statistics.as_ref().unwrap().view_count.as_deref(), Some("1000"));
        assert_eq!(
            item.content_details.as_ref().unwrap().duration.as_deref(),
            Some("PT10M")
        );
    }
}
