use thiserror::Error;

/// Failures surfaced by the quiz core. Both kinds are caller errors and carry the
/// message of the rule that was violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),
}

impl QuizError {
    pub fn empty_string(field: &str) -> Self {
        Self::InvalidArgument(format!("{field} is an empty string"))
    }

    pub fn unknown_quiz() -> Self {
        Self::NotFound("quizId does not refer to a valid quiz".into())
    }

    pub fn unknown_question() -> Self {
        Self::NotFound("questionId does not refer to a valid question".into())
    }

    pub fn unknown_question_kind() -> Self {
        Self::InvalidArgument(r#"questionType is not either "single" or "multiple""#.into())
    }

    pub fn no_correct_answers() -> Self {
        Self::InvalidArgument("there are no correct answers".into())
    }

    pub fn not_exactly_one_correct_answer() -> Self {
        Self::InvalidArgument(
            r#"the questionType is "single" and there is not exactly 1 correct answer"#.into(),
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod quiz_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(QuizError::empty_string("quizTitle"), "quizTitle is an empty string")]
    #[case(QuizError::unknown_quiz(), "quizId does not refer to a valid quiz")]
    #[case(QuizError::no_correct_answers(), "there are no correct answers")]
    #[case(
        QuizError::unknown_question_kind(),
        r#"questionType is not either "single" or "multiple""#
    )]
    fn it_should_display_the_bare_message(#[case] error: QuizError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn it_should_tell_not_found_apart_from_invalid_arguments() {
        assert!(QuizError::unknown_question().is_not_found());
        assert!(!QuizError::not_exactly_one_correct_answer().is_not_found());
    }
}
