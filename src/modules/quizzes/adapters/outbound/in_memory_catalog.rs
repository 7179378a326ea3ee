// In memory implementation of the QuizCatalog port.
//
// Purpose
// - Serve the API and tests for the lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Guard the QuizBook with a single RwLock: mutations hold the write guard for the whole
//   operation, reads share the read guard.

use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::ports::QuizCatalog;
use crate::modules::quizzes::core::question::{QuestionDraft, QuestionId};
use crate::modules::quizzes::core::quiz::{QuizDetails, QuizId, QuizSummary};
use crate::modules::quizzes::core::quiz_book::QuizBook;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct InMemoryQuizCatalog {
    book: RwLock<QuizBook>,
}

impl InMemoryQuizCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn log_rejection(operation: &'static str) -> impl Fn(&QuizError) {
    move |error: &QuizError| debug!(operation, %error, "request rejected")
}

#[async_trait::async_trait]
impl QuizCatalog for InMemoryQuizCatalog {
    async fn create_quiz(&self, title: String, synopsis: String) -> Result<QuizId, QuizError> {
        let quiz_id = self
            .book
            .write()
            .await
            .create_quiz(title, synopsis)
            .inspect_err(log_rejection("create_quiz"))?;
        debug!(%quiz_id, "quiz created");
        Ok(quiz_id)
    }

    async fn get_quiz_details(&self, quiz_id: QuizId) -> Result<QuizDetails, QuizError> {
        self.book
            .read()
            .await
            .get_quiz_details(quiz_id)
            .inspect_err(log_rejection("get_quiz_details"))
    }

    async fn edit_quiz(
        &self,
        quiz_id: QuizId,
        title: String,
        synopsis: String,
    ) -> Result<(), QuizError> {
        self.book
            .write()
            .await
            .edit_quiz(quiz_id, title, synopsis)
            .inspect_err(log_rejection("edit_quiz"))?;
        debug!(%quiz_id, "quiz edited");
        Ok(())
    }

    async fn remove_quiz(&self, quiz_id: QuizId) -> Result<(), QuizError> {
        self.book
            .write()
            .await
            .remove_quiz(quiz_id)
            .inspect_err(log_rejection("remove_quiz"))?;
        debug!(%quiz_id, "quiz removed");
        Ok(())
    }

    async fn list_quizzes(&self) -> Vec<QuizSummary> {
        self.book.read().await.list_quizzes()
    }

    async fn add_question(
        &self,
        quiz_id: QuizId,
        draft: QuestionDraft,
    ) -> Result<QuestionId, QuizError> {
        let question_id = self
            .book
            .write()
            .await
            .add_question(quiz_id, draft)
            .inspect_err(log_rejection("add_question"))?;
        debug!(%quiz_id, %question_id, "question added");
        Ok(question_id)
    }

    async fn edit_question(
        &self,
        question_id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<(), QuizError> {
        self.book
            .write()
            .await
            .edit_question(question_id, draft)
            .inspect_err(log_rejection("edit_question"))?;
        debug!(%question_id, "question edited");
        Ok(())
    }

    async fn remove_question(&self, question_id: QuestionId) -> Result<(), QuizError> {
        self.book
            .write()
            .await
            .remove_question(question_id)
            .inspect_err(log_rejection("remove_question"))?;
        debug!(%question_id, "question removed");
        Ok(())
    }

    async fn reset_all(&self) {
        self.book.write().await.reset_all();
        info!("quiz catalog cleared");
    }
}
