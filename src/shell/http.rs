use axum::{
    Extension, Router,
    routing::{delete, get, post, put},
};

use crate::modules::quizzes::use_cases::browse_quizzes::inbound::http as browse_http;
use crate::modules::quizzes::use_cases::clear_catalog::inbound::http as clear_http;
use crate::modules::quizzes::use_cases::manage_questions::inbound::http as questions_http;
use crate::modules::quizzes::use_cases::manage_quizzes::inbound::http as quizzes_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .route("/", get(clear_http::root))
        .route("/quiz/create", post(quizzes_http::create))
        .route("/quiz/details", get(browse_http::details))
        .route("/quiz/edit", put(quizzes_http::edit))
        .route("/quiz/remove", delete(quizzes_http::remove))
        .route("/quizzes/list", get(browse_http::list))
        .route("/question/add", post(questions_http::add))
        .route("/question/edit", post(questions_http::edit))
        .route("/question/remove", delete(questions_http::remove))
        .route("/clear", delete(clear_http::clear))
        .with_state(state)
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
}
