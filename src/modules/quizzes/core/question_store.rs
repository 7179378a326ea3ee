use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::question::{Question, QuestionDraft, QuestionId};
use crate::modules::quizzes::core::quiz::{Quiz, QuizId};
use crate::modules::quizzes::core::quiz_store::QuizStore;
use crate::modules::quizzes::core::validation::validate_draft;
use std::collections::HashMap;

const FIRST_QUESTION_ID: i64 = 0;

/// Owns question content, the global question id sequence and the reverse index from a
/// question to its quiz.
///
/// Every indexed question is listed by exactly one live quiz and every id a quiz lists is
/// indexed here. Operations that touch a quiz's list take the `QuizStore` explicitly.
#[derive(Debug)]
pub struct QuestionStore {
    questions: HashMap<QuestionId, Question>,
    owners: HashMap<QuestionId, QuizId>,
    next_id: i64,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore {
    pub fn new() -> Self {
        Self {
            questions: HashMap::new(),
            owners: HashMap::new(),
            next_id: FIRST_QUESTION_ID,
        }
    }

    pub fn add_question(
        &mut self,
        quizzes: &mut QuizStore,
        quiz_id: QuizId,
        draft: QuestionDraft,
    ) -> Result<QuestionId, QuizError> {
        quizzes.get_quiz(quiz_id)?;
        let kind = validate_draft(&draft)?;

        let id = QuestionId(self.next_id);
        quizzes.get_quiz_mut(quiz_id)?.question_ids.push(id);
        self.next_id += 1;
        self.questions.insert(
            id,
            Question {
                id,
                text: draft.text,
                kind,
                answers: draft.answers,
            },
        );
        self.owners.insert(id, quiz_id);
        Ok(id)
    }

    /// Replaces the content of a question. The quiz keeps listing it at the same position.
    pub fn edit_question(
        &mut self,
        quizzes: &QuizStore,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<(), QuizError> {
        self.resolve_owning_quiz(quizzes, id)?;
        let kind = validate_draft(&draft)?;

        let question = self
            .questions
            .get_mut(&id)
            .ok_or_else(QuizError::unknown_question)?;
        question.text = draft.text;
        question.kind = kind;
        question.answers = draft.answers;
        Ok(())
    }

    pub fn remove_question(
        &mut self,
        quizzes: &mut QuizStore,
        id: QuestionId,
    ) -> Result<(), QuizError> {
        let quiz_id = self.resolve_owning_quiz(quizzes, id)?.id;
        quizzes
            .get_quiz_mut(quiz_id)?
            .question_ids
            .retain(|question_id| *question_id != id);
        self.discard(id);
        Ok(())
    }

    /// Looks up the quiz a question belongs to.
    ///
    /// # Panics
    /// When the index names a quiz that no longer exists. That state cannot be reached
    /// through the public operations and points at a bug, not at bad input.
    pub fn resolve_owning_quiz<'a>(
        &self,
        quizzes: &'a QuizStore,
        id: QuestionId,
    ) -> Result<&'a Quiz, QuizError> {
        let quiz_id = self.owners.get(&id).ok_or_else(QuizError::unknown_question)?;
        match quizzes.get_quiz(*quiz_id) {
            Ok(quiz) => Ok(quiz),
            Err(_) => panic!("question {id} is indexed under quiz {quiz_id}, which does not exist"),
        }
    }

    pub fn get_question(&self, id: QuestionId) -> Result<&Question, QuizError> {
        if !self.owners.contains_key(&id) {
            return Err(QuizError::unknown_question());
        }
        self.questions.get(&id).ok_or_else(QuizError::unknown_question)
    }

    /// The questions of `quiz` in display order.
    ///
    /// # Panics
    /// When the quiz lists a question this store does not hold.
    pub fn questions_of(&self, quiz: &Quiz) -> Vec<Question> {
        quiz.question_ids
            .iter()
            .map(|id| match self.questions.get(id) {
                Some(question) => question.clone(),
                None => panic!("quiz {} lists question {id}, which does not exist", quiz.id),
            })
            .collect()
    }

    /// Drops a question and its index entry without touching any quiz's list.
    pub(crate) fn discard(&mut self, id: QuestionId) {
        self.questions.remove(&id);
        self.owners.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn reset(&mut self) {
        self.questions.clear();
        self.owners.clear();
        self.next_id = FIRST_QUESTION_ID;
    }
}
