use crate::modules::quizzes::core::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizId(pub i64);

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz as held by the quiz store. Questions are referenced by id in display order;
/// their content lives in the question store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub synopsis: String,
    pub question_ids: Vec<QuestionId>,
}

impl Quiz {
    pub fn new(id: QuizId, title: String, synopsis: String) -> Self {
        Self {
            id,
            title,
            synopsis,
            question_ids: Vec::new(),
        }
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            quiz_id: self.id,
            quiz_title: self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub quiz_id: QuizId,
    pub quiz_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDetails {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub quiz_synopsis: String,
    pub questions: Vec<Question>,
}
