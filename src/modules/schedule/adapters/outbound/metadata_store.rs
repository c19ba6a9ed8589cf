// Cached metadata lists of the schedule API.
//
// Purpose
// - Front the four slow-changing metadata endpoints with one ResourceCache each.
//
// Responsibilities
// - Fetch the four lists concurrently and join before anything derives from them.
// - Reset every cache on reload(); live records are never cached here.

use crate::modules::schedule::adapters::outbound::schedule_api::{
    self, ApiError, ScheduleApi,
};
use crate::modules::schedule::core::records::{LiveTag, LiveTagMeta, Vup, VupMeta};
use crate::shared::infrastructure::resource_cache::{CacheStatus, ResourceCache};
use std::sync::Arc;

/// A joined snapshot of all four metadata lists.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub vups: Arc<Vec<Vup>>,
    pub vup_meta: Arc<Vec<VupMeta>>,
    pub live_tags: Arc<Vec<LiveTag>>,
    pub live_tag_meta: Arc<Vec<LiveTagMeta>>,
}

pub struct MetadataStore {
    api: Arc<dyn ScheduleApi>,
    vups: ResourceCache<Vec<Vup>, ApiError>,
    vup_meta: ResourceCache<Vec<VupMeta>, ApiError>,
    live_tags: ResourceCache<Vec<LiveTag>, ApiError>,
    live_tag_meta: ResourceCache<Vec<LiveTagMeta>, ApiError>,
}

impl MetadataStore {
    pub fn new(api: Arc<dyn ScheduleApi>) -> Self {
        Self {
            api,
            vups: ResourceCache::new(schedule_api::VUPS),
            vup_meta: ResourceCache::new(schedule_api::VUP_META),
            live_tags: ResourceCache::new(schedule_api::LIVE_TAGS),
            live_tag_meta: ResourceCache::new(schedule_api::LIVE_TAG_META),
        }
    }

    pub async fn vups(&self) -> Result<Arc<Vec<Vup>>, ApiError> {
        let api = Arc::clone(&self.api);
        self.vups
            .get_or_fetch(move || async move { api.vups().await })
            .await
    }

    pub async fn vup_meta(&self) -> Result<Arc<Vec<VupMeta>>, ApiError> {
        let api = Arc::clone(&self.api);
        self.vup_meta
            .get_or_fetch(move || async move { api.vup_meta().await })
            .await
    }

    pub async fn live_tags(&self) -> Result<Arc<Vec<LiveTag>>, ApiError> {
        let api = Arc::clone(&self.api);
        self.live_tags
            .get_or_fetch(move || async move { api.live_tags().await })
            .await
    }

    pub async fn live_tag_meta(&self) -> Result<Arc<Vec<LiveTagMeta>>, ApiError> {
        let api = Arc::clone(&self.api);
        self.live_tag_meta
            .get_or_fetch(move || async move { api.live_tag_meta().await })
            .await
    }

    pub async fn load_all(&self) -> Result<Metadata, ApiError> {
        let (vups, vup_meta, live_tags, live_tag_meta) = tokio::try_join!(
            self.vups(),
            self.vup_meta(),
            self.live_tags(),
            self.live_tag_meta(),
        )?;
        Ok(Metadata {
            vups,
            vup_meta,
            live_tags,
            live_tag_meta,
        })
    }

    pub async fn reload(&self) {
        tokio::join!(
            self.vups.reload(),
            self.vup_meta.reload(),
            self.live_tags.reload(),
            self.live_tag_meta.reload(),
        );
        tracing::info!("metadata caches reset");
    }

    pub async fn status(&self) -> Vec<(&'static str, CacheStatus)> {
        vec![
            (self.vups.name(), self.vups.status().await),
            (self.vup_meta.name(), self.vup_meta.status().await),
            (self.live_tags.name(), self.live_tags.status().await),
            (self.live_tag_meta.name(), self.live_tag_meta.status().await),
        ]
    }
}
