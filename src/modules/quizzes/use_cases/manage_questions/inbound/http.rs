use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::quizzes::adapters::inbound::error_response::ErrorBody;
use crate::modules::quizzes::core::question::{Answer, QuestionDraft, QuestionId};
use crate::modules::quizzes::core::quiz::QuizId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQuestionBody {
    pub quiz_id: QuizId,
    pub question_string: String,
    pub question_type: String,
    pub answers: Vec<Answer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQuestionResponse {
    pub question_id: QuestionId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditQuestionBody {
    pub question_id: QuestionId,
    pub question_string: String,
    pub question_type: String,
    pub answers: Vec<Answer>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveQuestionParams {
    pub question_id: QuestionId,
}

pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<AddQuestionBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ErrorBody::with_status(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let draft = QuestionDraft {
        text: body.question_string,
        kind: body.question_type,
        answers: body.answers,
    };
    match state.catalog.add_question(body.quiz_id, draft).await {
        Ok(question_id) => Json(AddQuestionResponse { question_id }).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    body: Result<Json<EditQuestionBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ErrorBody::with_status(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let draft = QuestionDraft {
        text: body.question_string,
        kind: body.question_type,
        answers: body.answers,
    };
    match state.catalog.edit_question(body.question_id, draft).await {
        Ok(()) => Json(serde_json::json!({})).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<RemoveQuestionParams>,
) -> Response {
    match state.catalog.remove_question(params.question_id).await {
        Ok(()) => Json(serde_json::json!({})).into_response(),
        Err(error) => error.into_response(),
    }
}
