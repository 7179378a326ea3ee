use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::quizzes::core::question::{Answer, QuestionDraft, QuestionId};
use crate::modules::quizzes::core::quiz::QuizId;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct AnswerInput {
    pub answer_string: String,
    pub is_correct: bool,
}

impl From<AnswerInput> for Answer {
    fn from(a: AnswerInput) -> Self {
        Answer::new(a.answer_string, a.is_correct)
    }
}

fn draft(question_string: String, question_type: String, answers: Vec<AnswerInput>) -> QuestionDraft {
    QuestionDraft {
        text: question_string,
        kind: question_type,
        answers: answers.into_iter().map(Into::into).collect(),
    }
}

#[derive(Default)]
pub struct QuestionMutation;

#[Object]
impl QuestionMutation {
    async fn add_question(
        &self,
        context: &Context<'_>,
        quiz_id: i64,
        question_string: String,
        question_type: String,
        answers: Vec<AnswerInput>,
    ) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        let question_id = state
            .catalog
            .add_question(
                QuizId(quiz_id),
                draft(question_string, question_type, answers),
            )
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(question_id.0)
    }

    async fn edit_question(
        &self,
        context: &Context<'_>,
        question_id: i64,
        question_string: String,
        question_type: String,
        answers: Vec<AnswerInput>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .catalog
            .edit_question(
                QuestionId(question_id),
                draft(question_string, question_type, answers),
            )
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }

    async fn remove_question(&self, context: &Context<'_>, question_id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .catalog
            .remove_question(QuestionId(question_id))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
