use axum::{
    extract::{Path, State},
    Json,
};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::database::ContentRepository;
use crate::models::{Channel, FilterColumn, Level};

/// 指定列の去重值一览。列は白名单（category_title / players）限定。
pub async fn get_unique_values(
    Path(column): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<String>>> {
    let column: FilterColumn = column
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid column".to_string()))?;

    let values = state.database.repository().distinct_values(column).await?;
    Ok(Json(values))
}

pub async fn get_levels(State(state): State<AppState>) -> ApiResult<Json<Vec<Level>>> {
    let levels = state.database.repository().get_levels().await?;
    Ok(Json(levels))
}

pub async fn get_channels(State(state): State<AppState>) -> ApiResult<Json<Vec<Channel>>> {
    let channels = state.database.repository().get_channels().await?;
    Ok(Json(channels))
}
