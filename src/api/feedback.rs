use axum::{extract::State, response::IntoResponse, Json};

use super::error::ApiResult;
use super::response::success_message;
use super::AppState;
use crate::database::ContentRepository;
use crate::models::Feedback;

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(feedback): Json<Feedback>,
) -> ApiResult<impl IntoResponse> {
    tracing::info!(
        "Received feedback submission: name={}, category={}",
        feedback.name,
        feedback.category
    );

    state.database.repository().insert_feedback(&feedback).await?;

    Ok(success_message("Feedback submitted successfully"))
}
