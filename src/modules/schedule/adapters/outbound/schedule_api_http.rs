// Schedule API over HTTP.
//
// Purpose
// - Talk to the real backend's /api/v1 endpoints.
//
// Responsibilities
// - Map transport failures to Unavailable, non-2xx to Status and bad bodies to Decode.
// - Treat a JSON null body as an empty list.

use crate::modules::schedule::adapters::outbound::schedule_api::{
    self, ApiError, ScheduleApi,
};
use crate::modules::schedule::core::records::{LiveRecord, LiveTag, LiveTagMeta, Vup, VupMeta};
use crate::shared::core::iso_week::IsoWeek;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("live_schedule/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 15;

pub struct HttpScheduleApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpScheduleApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Unavailable {
                resource: "client",
                reason: e.to_string(),
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(resource, url = %url, "querying schedule api");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Unavailable {
                resource,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(resource, status = status.as_u16(), "schedule api rejected request");
            return Err(ApiError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body: Option<Vec<T>> = response.json().await.map_err(|e| ApiError::Decode {
            resource,
            reason: e.to_string(),
        })?;
        Ok(body.unwrap_or_default())
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn vups(&self) -> Result<Vec<Vup>, ApiError> {
        self.get_list(schedule_api::VUPS, "/api/v1/vup").await
    }

    async fn vup_meta(&self) -> Result<Vec<VupMeta>, ApiError> {
        self.get_list(schedule_api::VUP_META, "/api/v1/vup_meta").await
    }

    async fn live_tags(&self) -> Result<Vec<LiveTag>, ApiError> {
        self.get_list(schedule_api::LIVE_TAGS, "/api/v1/live_tag").await
    }

    async fn live_tag_meta(&self) -> Result<Vec<LiveTagMeta>, ApiError> {
        self.get_list(schedule_api::LIVE_TAG_META, "/api/v1/live_tag_meta")
            .await
    }

    async fn available_weeks(&self) -> Result<Vec<IsoWeek>, ApiError> {
        self.get_list(
            schedule_api::AVAILABLE_WEEKS,
            "/api/v1/live_records/available_weeks",
        )
        .await
    }

    async fn live_records_by_week(&self, week: IsoWeek) -> Result<Vec<LiveRecord>, ApiError> {
        let path = format!("/api/v1/live_records/all/{}/{}", week.year(), week.week());
        self.get_list(schedule_api::LIVE_RECORDS, &path).await
    }
}
