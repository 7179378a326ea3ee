use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "quizzes api is running",
    })
}

pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.catalog.reset_all().await;
    Json(serde_json::json!({}))
}
