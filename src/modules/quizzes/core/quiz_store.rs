use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::question_store::QuestionStore;
use crate::modules::quizzes::core::quiz::{Quiz, QuizId, QuizSummary};
use crate::modules::quizzes::core::validation::ensure_not_empty;
use std::collections::BTreeMap;

const FIRST_QUIZ_ID: i64 = 0;

/// Owns every quiz and the quiz id sequence. Ids come from a counter that only moves
/// forward, so removing a quiz never frees its id.
#[derive(Debug)]
pub struct QuizStore {
    quizzes: BTreeMap<QuizId, Quiz>,
    next_id: i64,
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore {
    pub fn new() -> Self {
        Self {
            quizzes: BTreeMap::new(),
            next_id: FIRST_QUIZ_ID,
        }
    }

    pub fn create_quiz(&mut self, title: String, synopsis: String) -> Result<QuizId, QuizError> {
        ensure_not_empty(&title, "quizTitle")?;
        ensure_not_empty(&synopsis, "quizSynopsis")?;

        let id = QuizId(self.next_id);
        self.next_id += 1;
        self.quizzes.insert(id, Quiz::new(id, title, synopsis));
        Ok(id)
    }

    pub fn get_quiz(&self, id: QuizId) -> Result<&Quiz, QuizError> {
        self.quizzes.get(&id).ok_or_else(QuizError::unknown_quiz)
    }

    pub(crate) fn get_quiz_mut(&mut self, id: QuizId) -> Result<&mut Quiz, QuizError> {
        self.quizzes.get_mut(&id).ok_or_else(QuizError::unknown_quiz)
    }

    pub fn edit_quiz(
        &mut self,
        id: QuizId,
        title: String,
        synopsis: String,
    ) -> Result<(), QuizError> {
        self.get_quiz(id)?;
        ensure_not_empty(&title, "quizTitle")?;
        ensure_not_empty(&synopsis, "quizSynopsis")?;

        let quiz = self.get_quiz_mut(id)?;
        quiz.title = title;
        quiz.synopsis = synopsis;
        Ok(())
    }

    /// Removes the quiz and drops each of its questions from `questions`, leaving no
    /// reverse index entry behind.
    pub fn remove_quiz(
        &mut self,
        id: QuizId,
        questions: &mut QuestionStore,
    ) -> Result<(), QuizError> {
        let quiz = self.quizzes.remove(&id).ok_or_else(QuizError::unknown_quiz)?;
        for question_id in quiz.question_ids {
            questions.discard(question_id);
        }
        Ok(())
    }

    pub fn list_quizzes(&self) -> Vec<QuizSummary> {
        self.quizzes.values().map(Quiz::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn reset(&mut self) {
        self.quizzes.clear();
        self.next_id = FIRST_QUIZ_ID;
    }
}
