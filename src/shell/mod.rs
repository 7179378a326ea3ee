// Composition root for the quizzes bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory catalog behind AppState.
// - Wire REST and GraphQL inbound adapters into one router.

pub mod graphql;
pub mod http;
pub mod state;
