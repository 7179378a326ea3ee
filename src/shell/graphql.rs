use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

pub use crate::modules::quizzes::use_cases::browse_quizzes::inbound::graphql::QueryRoot;
use crate::modules::quizzes::use_cases::clear_catalog::inbound::graphql::ClearMutation;
use crate::modules::quizzes::use_cases::manage_questions::inbound::graphql::QuestionMutation;
use crate::modules::quizzes::use_cases::manage_quizzes::inbound::graphql::QuizMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(QuizMutation, QuestionMutation, ClearMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
