use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::question::{QuestionDraft, QuestionId};
use crate::modules::quizzes::core::question_store::QuestionStore;
use crate::modules::quizzes::core::quiz::{QuizDetails, QuizId, QuizSummary};
use crate::modules::quizzes::core::quiz_store::QuizStore;

/// The quiz store and question store behind the operations callers use. Synchronous and
/// single-writer: callers sharing a book serialize mutations themselves.
#[derive(Debug, Default)]
pub struct QuizBook {
    quizzes: QuizStore,
    questions: QuestionStore,
}

impl QuizBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_quiz(
        &mut self,
        title: impl Into<String>,
        synopsis: impl Into<String>,
    ) -> Result<QuizId, QuizError> {
        self.quizzes.create_quiz(title.into(), synopsis.into())
    }

    pub fn get_quiz_details(&self, quiz_id: QuizId) -> Result<QuizDetails, QuizError> {
        let quiz = self.quizzes.get_quiz(quiz_id)?;
        Ok(QuizDetails {
            quiz_id: quiz.id,
            quiz_title: quiz.title.clone(),
            quiz_synopsis: quiz.synopsis.clone(),
            questions: self.questions.questions_of(quiz),
        })
    }

    pub fn edit_quiz(
        &mut self,
        quiz_id: QuizId,
        title: impl Into<String>,
        synopsis: impl Into<String>,
    ) -> Result<(), QuizError> {
        self.quizzes.edit_quiz(quiz_id, title.into(), synopsis.into())
    }

    pub fn remove_quiz(&mut self, quiz_id: QuizId) -> Result<(), QuizError> {
        self.quizzes.remove_quiz(quiz_id, &mut self.questions)
    }

    pub fn list_quizzes(&self) -> Vec<QuizSummary> {
        self.quizzes.list_quizzes()
    }

    pub fn add_question(
        &mut self,
        quiz_id: QuizId,
        draft: QuestionDraft,
    ) -> Result<QuestionId, QuizError> {
        self.questions.add_question(&mut self.quizzes, quiz_id, draft)
    }

    pub fn edit_question(
        &mut self,
        question_id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<(), QuizError> {
        self.questions.edit_question(&self.quizzes, question_id, draft)
    }

    pub fn remove_question(&mut self, question_id: QuestionId) -> Result<(), QuizError> {
        self.questions.remove_question(&mut self.quizzes, question_id)
    }

    pub fn reset_all(&mut self) {
        self.quizzes.reset();
        self.questions.reset();
    }
}
