use axum::{extract::State, response::IntoResponse};
use serde_json::json;

use super::error::{ApiError, ApiResult};
use super::response::success;
use super::AppState;

/// 健康检查端点
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    // 检查数据库连接
    state.database.verify_integrity().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::Internal("Database connection failed".to_string())
    })?;

    let youtube_status = if state.ingest.is_available() {
        "available"
    } else {
        "not_configured"
    };

    Ok(success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "1.0.0",
        "database": "connected",
        "youtube_api": youtube_status
    })))
}

/// 获取系统统计信息
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let stats = state
        .database
        .get_stats()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to get database stats: {}", e)))?;

    Ok(success(json!({
        "contents_count": stats.contents_count,
        "category_count": stats.category_count,
        "channel_count": stats.channel_count,
        "feedback_count": stats.feedback_count,
        "database_size_mb": stats.database_size_mb(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
