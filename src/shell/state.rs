use crate::modules::quizzes::adapters::outbound::in_memory_catalog::InMemoryQuizCatalog;
use crate::modules::quizzes::core::ports::QuizCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn QuizCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn QuizCatalog>) -> Self {
        Self { catalog }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryQuizCatalog::new()))
    }
}
