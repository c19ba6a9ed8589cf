use crate::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use std::sync::Arc;

/// Forgets every cached metadata list, failures included.
pub struct ReloadMetadataHandler {
    metadata: Arc<MetadataStore>,
}

impl ReloadMetadataHandler {
    pub fn new(metadata: Arc<MetadataStore>) -> Self {
        Self { metadata }
    }

    pub async fn handle(&self) {
        self.metadata.reload().await;
    }
}
