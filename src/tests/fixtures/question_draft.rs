use crate::modules::quizzes::core::question::{Answer, QuestionDraft};
use crate::tests::fixtures::answers::single_correct;

/// Builds a valid single-answer draft; setters override one field at a time.
pub struct QuestionDraftBuilder {
    inner: QuestionDraft,
}

impl Default for QuestionDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl QuestionDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: QuestionDraft {
                text: "question1".to_string(),
                kind: "single".to_string(),
                answers: single_correct(),
            },
        }
    }

    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.inner.text = v.into();
        self
    }

    pub fn kind(mut self, v: impl Into<String>) -> Self {
        self.inner.kind = v.into();
        self
    }

    pub fn answers(mut self, v: Vec<Answer>) -> Self {
        self.inner.answers = v;
        self
    }

    pub fn build(self) -> QuestionDraft {
        self.inner
    }
}

#[cfg(test)]
mod question_draft_builder_tests {
    use super::*;
    use crate::tests::fixtures::answers::multiple_correct;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = QuestionDraftBuilder::default().build();
        assert_eq!(built.text, "question1");
        assert_eq!(built.kind, "single");
        assert_eq!(built.answers, single_correct());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = QuestionDraftBuilder::new()
            .text("edit")
            .kind("multiple")
            .answers(multiple_correct())
            .build();
        assert_eq!(custom.text, "edit");
        assert_eq!(custom.kind, "multiple");
        assert_eq!(custom.answers, multiple_correct());
    }
}
