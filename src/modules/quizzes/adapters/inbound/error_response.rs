use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::quizzes::core::errors::QuizError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn with_status(status: StatusCode, error: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorBody {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

// Unknown ids are client errors here, the same as invalid fields.
impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        ErrorBody::with_status(StatusCode::BAD_REQUEST, self.to_string())
    }
}
