use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::quizzes::core::question::{Answer, Question};
use crate::modules::quizzes::core::quiz::{QuizDetails, QuizId, QuizSummary};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAnswer {
    pub answer_string: String,
    pub is_correct: bool,
}

impl From<Answer> for GqlAnswer {
    fn from(a: Answer) -> Self {
        Self {
            answer_string: a.text,
            is_correct: a.is_correct,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlQuestion {
    pub question_id: i64,
    pub question_string: String,
    pub question_type: String,
    pub answers: Vec<GqlAnswer>,
}

impl From<Question> for GqlQuestion {
    fn from(q: Question) -> Self {
        Self {
            question_id: q.id.0,
            question_string: q.text,
            question_type: q.kind.as_str().to_string(),
            answers: q.answers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlQuiz {
    pub quiz_id: i64,
    pub quiz_title: String,
    pub quiz_synopsis: String,
    pub questions: Vec<GqlQuestion>,
}

impl From<QuizDetails> for GqlQuiz {
    fn from(d: QuizDetails) -> Self {
        Self {
            quiz_id: d.quiz_id.0,
            quiz_title: d.quiz_title,
            quiz_synopsis: d.quiz_synopsis,
            questions: d.questions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlQuizSummary {
    pub quiz_id: i64,
    pub quiz_title: String,
}

impl From<QuizSummary> for GqlQuizSummary {
    fn from(s: QuizSummary) -> Self {
        Self {
            quiz_id: s.quiz_id.0,
            quiz_title: s.quiz_title,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quiz(&self, context: &Context<'_>, quiz_id: i64) -> GqlResult<GqlQuiz> {
        let state = context.data_unchecked::<AppState>();
        let details = state
            .catalog
            .get_quiz_details(QuizId(quiz_id))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(details.into())
    }

    async fn quizzes(&self, context: &Context<'_>) -> Vec<GqlQuizSummary> {
        let state = context.data_unchecked::<AppState>();
        state
            .catalog
            .list_quizzes()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
