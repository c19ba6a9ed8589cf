use crate::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use crate::modules::schedule::core::tag_key::TagKey;
use crate::modules::schedule::core::tag_meta::{TagCatalog, TagMeta};
use crate::modules::schedule::use_cases::application_error::ApplicationError;
use std::sync::Arc;

pub struct GetTagCatalogHandler {
    metadata: Arc<MetadataStore>,
}

impl GetTagCatalogHandler {
    pub fn new(metadata: Arc<MetadataStore>) -> Self {
        Self { metadata }
    }

    pub async fn handle(&self) -> Result<TagCatalog, ApplicationError> {
        let metadata = self.metadata.load_all().await?;
        Ok(TagCatalog::build(
            &metadata.vups,
            &metadata.vup_meta,
            &metadata.live_tags,
            &metadata.live_tag_meta,
        ))
    }

    pub async fn tag_meta(&self, key: TagKey) -> Result<TagMeta, ApplicationError> {
        Ok(self.handle().await?.resolve(key))
    }

    pub async fn member_tags(&self) -> Result<Vec<TagKey>, ApplicationError> {
        Ok(self.handle().await?.member_tags)
    }

    pub async fn type_tags(&self) -> Result<Vec<TagKey>, ApplicationError> {
        Ok(self.handle().await?.type_tags)
    }
}
