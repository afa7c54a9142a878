use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::ApiResult;
use super::response::success;
use super::AppState;

/// 指定ハンドルのチャンネルを取り込む
pub async fn sync_channel(
    Path(handle): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let summary = state.ingest.sync_channel(&handle).await?;
    Ok(success(summary))
}
