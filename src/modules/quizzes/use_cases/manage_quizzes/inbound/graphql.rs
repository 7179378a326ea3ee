use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::quizzes::core::quiz::QuizId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QuizMutation;

#[Object]
impl QuizMutation {
    async fn create_quiz(
        &self,
        context: &Context<'_>,
        quiz_title: String,
        quiz_synopsis: String,
    ) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        let quiz_id = state
            .catalog
            .create_quiz(quiz_title, quiz_synopsis)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(quiz_id.0)
    }

    async fn edit_quiz(
        &self,
        context: &Context<'_>,
        quiz_id: i64,
        quiz_title: String,
        quiz_synopsis: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .catalog
            .edit_quiz(QuizId(quiz_id), quiz_title, quiz_synopsis)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }

    async fn remove_quiz(&self, context: &Context<'_>, quiz_id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .catalog
            .remove_quiz(QuizId(quiz_id))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
