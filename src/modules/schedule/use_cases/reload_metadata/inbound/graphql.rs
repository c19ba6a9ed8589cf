use async_graphql::{Context, Object};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ReloadMetadataMutation;

#[Object]
impl ReloadMetadataMutation {
    /// Drops cached performer and tag lists; the next read refetches them.
    async fn reload_metadata(&self, context: &Context<'_>) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.reload_handler.handle().await;
        true
    }
}
