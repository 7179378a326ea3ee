// Answer sets shared by the core and adapter tests.

use crate::modules::quizzes::core::question::Answer;

pub fn single_correct() -> Vec<Answer> {
    vec![
        Answer::new("correct ans", true),
        Answer::new("wrong ans", false),
    ]
}

pub fn multiple_correct() -> Vec<Answer> {
    vec![
        Answer::new("correct ans", true),
        Answer::new("correct ans too", true),
    ]
}

pub fn no_correct() -> Vec<Answer> {
    vec![
        Answer::new("wrong ans", false),
        Answer::new("wrong ans too", false),
    ]
}

pub fn empty_answer_text() -> Vec<Answer> {
    vec![Answer::new("correct ans", true), Answer::new("", false)]
}
