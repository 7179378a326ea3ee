use crate::modules::quizzes::core::errors::QuizError;
use crate::modules::quizzes::core::question::{Answer, QuestionDraft, QuestionKind};

pub fn ensure_not_empty(value: &str, field: &str) -> Result<(), QuizError> {
    if value.is_empty() {
        return Err(QuizError::empty_string(field));
    }
    Ok(())
}

/// A question with no correct answer is rejected the same way for both kinds; only a
/// single-answer question with several correct answers gets the cardinality message.
pub fn ensure_correct_answers(kind: QuestionKind, answers: &[Answer]) -> Result<(), QuizError> {
    let correct = answers.iter().filter(|answer| answer.is_correct).count();
    if correct == 0 {
        return Err(QuizError::no_correct_answers());
    }
    if kind == QuestionKind::Single && correct != 1 {
        return Err(QuizError::not_exactly_one_correct_answer());
    }
    Ok(())
}

pub fn ensure_answer_texts(answers: &[Answer]) -> Result<(), QuizError> {
    answers
        .iter()
        .try_for_each(|answer| ensure_not_empty(&answer.text, "any of the answerString"))
}

/// Field checks shared by add and edit, in order: text, kind, answer cardinality, answer texts.
pub fn validate_draft(draft: &QuestionDraft) -> Result<QuestionKind, QuizError> {
    ensure_not_empty(&draft.text, "questionString")?;
    let kind = draft.kind.parse::<QuestionKind>()?;
    ensure_correct_answers(kind, &draft.answers)?;
    ensure_answer_texts(&draft.answers)?;
    Ok(kind)
}
