use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::quizzes::core::quiz::QuizId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDetailsParams {
    pub quiz_id: QuizId,
}

pub async fn details(
    State(state): State<AppState>,
    Query(params): Query<QuizDetailsParams>,
) -> Response {
    match state.catalog.get_quiz_details(params.quiz_id).await {
        Ok(details) => Json(details).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.list_quizzes().await)
}
