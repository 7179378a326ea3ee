use async_graphql::{Context, Object};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClearMutation;

#[Object]
impl ClearMutation {
    async fn clear(&self, context: &Context<'_>) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.catalog.reset_all().await;
        true
    }
}
