use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::error::ApiResult;
use super::AppState;
use crate::database::ContentRepository;
use crate::models::{SearchFilters, SearchResponse, SortKey};

/// /search のクエリパラメータ（ブラウザからは全て文字列で届く）
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub players: Option<String>,
    pub level: Option<String>,
    pub channel: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl SearchParams {
    /// 空文字列のパラメータは「未指定」として扱う
    pub fn into_filters(self) -> SearchFilters {
        SearchFilters {
            query: non_empty(self.q).map(|q| q.trim().to_string()),
            category: non_empty(self.category),
            players: non_empty(self.players),
            level: non_empty(self.level),
            channel: non_empty(self.channel).and_then(|c| c.parse().ok()),
            sort: SortKey::parse(self.sort.as_deref().unwrap_or("upload_date")),
            limit: self.limit.unwrap_or(10),
            offset: self.offset.unwrap_or(0).max(0),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn search_activities(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> ApiResult<Json<SearchResponse>> {
    let filters = params.into_filters();
    tracing::info!(
        "Searching activities: q={:?}, sort={:?}, limit={}, offset={}",
        filters.query,
        filters.sort,
        filters.limit,
        filters.offset
    );

    let (activities, total) = state
        .database
        .repository()
        .search_activities(&filters)
        .await?;

    // 表示件数は変換で落ちる行が出る前の件数で数える
    let current_display_count = filters.offset + activities.len() as i64;
    let activities = state.converter.convert_all(activities).await;

    Ok(Json(SearchResponse {
        activities,
        total,
        current_display_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_become_none() {
        let params = SearchParams {
            q: Some("".to_string()),
            category: Some("  ".to_string()),
            channel: Some("".to_string()),
            ..Default::default()
        };
        let filters = params.into_filters();
        assert!(filters.query.is_none());
        assert!(filters.category.is_none());
        assert!(filters.channel.is_none());
        assert_eq!(filters.limit, 10);
        assert_eq!(filters.offset, 0);
    }

    #[test]
    fn test_channel_must_be_numeric() {
        let params = SearchParams {
            channel: Some("3".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_filters().channel, Some(3));

        let params = SearchParams {
            channel: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_filters().channel, None);
    }

    #[test]
    fn test_query_is_trimmed() {
        let params = SearchParams {
            q: Some("  ドリブル  ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_filters().query.as_deref(), Some("ドリブル"));
    }
}
