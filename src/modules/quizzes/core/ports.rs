// Ports define what the inbound adapters need from the quiz core, without naming a backing store.
//
// Boundaries
// - Entry points mirror QuizBook one to one and return core errors untouched.
// - Implementations own their concurrency discipline. Mutations must not interleave.

use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::question::{QuestionDraft, QuestionId};
use crate::modules::quizzes::core::quiz::{QuizDetails, QuizId, QuizSummary};
use async_trait::async_trait;

#[async_trait]
pub trait QuizCatalog: Send + Sync {
    async fn create_quiz(&self, title: String, synopsis: String) -> Result<QuizId, QuizError>;
    async fn get_quiz_details(&self, quiz_id: QuizId) -> Result<QuizDetails, QuizError>;
    async fn edit_quiz(
        &self,
        quiz_id: QuizId,
        title: String,
        synopsis: String,
    ) -> Result<(), QuizError>;
    async fn remove_quiz(&self, quiz_id: QuizId) -> Result<(), QuizError>;
    async fn list_quizzes(&self) -> Vec<QuizSummary>;
    async fn add_question(
        &self,
        quiz_id: QuizId,
        draft: QuestionDraft,
    ) -> Result<QuestionId, QuizError>;
    async fn edit_question(
        &self,
        question_id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<(), QuizError>;
    async fn remove_question(&self, question_id: QuestionId) -> Result<(), QuizError>;
    async fn reset_all(&self);
}
