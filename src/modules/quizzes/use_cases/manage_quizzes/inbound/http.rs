use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::quizzes::adapters::inbound::error_response::ErrorBody;
use crate::modules::quizzes::core::quiz::QuizId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizBody {
    pub quiz_title: String,
    pub quiz_synopsis: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizResponse {
    pub quiz_id: QuizId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditQuizBody {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub quiz_synopsis: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveQuizParams {
    pub quiz_id: QuizId,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateQuizBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ErrorBody::with_status(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state
        .catalog
        .create_quiz(body.quiz_title, body.quiz_synopsis)
        .await
    {
        Ok(quiz_id) => Json(CreateQuizResponse { quiz_id }).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    body: Result<Json<EditQuizBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ErrorBody::with_status(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state
        .catalog
        .edit_quiz(body.quiz_id, body.quiz_title, body.quiz_synopsis)
        .await
    {
        Ok(()) => Json(serde_json::json!({})).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<RemoveQuizParams>,
) -> Response {
    match state.catalog.remove_quiz(params.quiz_id).await {
        Ok(()) => Json(serde_json::json!({})).into_response(),
        Err(error) => error.into_response(),
    }
}
