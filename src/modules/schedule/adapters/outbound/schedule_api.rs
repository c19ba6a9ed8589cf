// Port for the schedule backend.
//
// Purpose
// - Describe the read-only endpoints the schedule needs, without choosing a transport.
//
// Boundaries
// - Implementations: the bundled in-memory mock and the HTTP client. The shell picks one
//   from configuration at startup.

use crate::modules::schedule::core::records::{LiveRecord, LiveTag, LiveTagMeta, Vup, VupMeta};
use crate::shared::core::iso_week::IsoWeek;
use crate::shared::infrastructure::resource_cache::FetchAborted;
use async_trait::async_trait;
use thiserror::Error;

pub const VUPS: &str = "vups";
pub const VUP_META: &str = "vup_meta";
pub const LIVE_TAGS: &str = "live_tags";
pub const LIVE_TAG_META: &str = "live_tag_meta";
pub const AVAILABLE_WEEKS: &str = "available_weeks";
pub const LIVE_RECORDS: &str = "live_records";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("failed to fetch {resource}: {reason}")]
    Unavailable {
        resource: &'static str,
        reason: String,
    },

    #[error("failed to fetch {resource}: status {status}")]
    Status {
        resource: &'static str,
        status: u16,
    },

    #[error("failed to decode {resource}: {reason}")]
    Decode {
        resource: &'static str,
        reason: String,
    },
}

impl From<FetchAborted> for ApiError {
    fn from(aborted: FetchAborted) -> Self {
        Self::Unavailable {
            resource: aborted.0,
            reason: aborted.to_string(),
        }
    }
}

#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn vups(&self) -> Result<Vec<Vup>, ApiError>;
    async fn vup_meta(&self) -> Result<Vec<VupMeta>, ApiError>;
    async fn live_tags(&self) -> Result<Vec<LiveTag>, ApiError>;
    async fn live_tag_meta(&self) -> Result<Vec<LiveTagMeta>, ApiError>;
    async fn available_weeks(&self) -> Result<Vec<IsoWeek>, ApiError>;
    async fn live_records_by_week(&self, week: IsoWeek) -> Result<Vec<LiveRecord>, ApiError>;
}
