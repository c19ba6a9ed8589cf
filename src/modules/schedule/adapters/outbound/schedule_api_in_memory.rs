// In memory schedule API.
//
// Purpose
// - Serve the bundled mock data set without a network.
//
// Responsibilities
// - Answer the available weeks from the records plus the data set's extra weeks.
// - Filter records by the week their start time falls in.
// - Simulate an unreachable backend via toggle_offline().

use crate::modules::schedule::adapters::outbound::schedule_api::{
    self, ApiError, ScheduleApi,
};
use crate::modules::schedule::core::grouping::{available_weeks, filter_by_week};
use crate::modules::schedule::core::records::{LiveRecord, LiveTag, LiveTagMeta, Vup, VupMeta};
use crate::shared::core::clock::{Clock, system_clock};
use crate::shared::core::iso_week::IsoWeek;
use async_trait::async_trait;
use chrono::TimeZone;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

const BUNDLED: &str = include_str!("mock_schedule.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockSchedule {
    #[serde(default)]
    pub vups: Vec<Vup>,
    #[serde(default)]
    pub vup_meta: Vec<VupMeta>,
    #[serde(default)]
    pub live_tags: Vec<LiveTag>,
    #[serde(default)]
    pub live_tag_meta: Vec<LiveTagMeta>,
    #[serde(default)]
    pub extra_weeks: Vec<IsoWeek>,
    #[serde(default)]
    pub live_records: Vec<LiveRecord>,
}

impl MockSchedule {
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED)
    }
}

pub struct InMemoryScheduleApi<Tz: TimeZone> {
    data: MockSchedule,
    tz: Tz,
    clock: Clock,
    is_offline: bool,
    delay_ms: AtomicU64,
    calls: AtomicUsize,
}

impl<Tz: TimeZone> InMemoryScheduleApi<Tz> {
    pub fn new(data: MockSchedule, tz: Tz) -> Self {
        Self {
            data,
            tz,
            clock: system_clock(),
            is_offline: false,
            delay_ms: AtomicU64::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn bundled(tz: Tz) -> Result<Self, serde_json::Error> {
        Ok(Self::new(MockSchedule::bundled()?, tz))
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of calls served so far, offline ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, resource: &'static str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(ApiError::Unavailable {
                resource,
                reason: "schedule api offline".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<Tz> ScheduleApi for InMemoryScheduleApi<Tz>
where
    Tz: TimeZone + Send + Sync + 'static,
    Tz::Offset: Send + Sync,
{
    async fn vups(&self) -> Result<Vec<Vup>, ApiError> {
        self.enter(schedule_api::VUPS).await?;
        Ok(self.data.vups.clone())
    }

    async fn vup_meta(&self) -> Result<Vec<VupMeta>, ApiError> {
        self.enter(schedule_api::VUP_META).await?;
        Ok(self.data.vup_meta.clone())
    }

    async fn live_tags(&self) -> Result<Vec<LiveTag>, ApiError> {
        self.enter(schedule_api::LIVE_TAGS).await?;
        Ok(self.data.live_tags.clone())
    }

    async fn live_tag_meta(&self) -> Result<Vec<LiveTagMeta>, ApiError> {
        self.enter(schedule_api::LIVE_TAG_META).await?;
        Ok(self.data.live_tag_meta.clone())
    }

    async fn available_weeks(&self) -> Result<Vec<IsoWeek>, ApiError> {
        self.enter(schedule_api::AVAILABLE_WEEKS).await?;
        Ok(available_weeks(
            &self.data.live_records,
            &self.data.extra_weeks,
            (self.clock)(),
            &self.tz,
        ))
    }

    async fn live_records_by_week(&self, week: IsoWeek) -> Result<Vec<LiveRecord>, ApiError> {
        self.enter(schedule_api::LIVE_RECORDS).await?;
        Ok(filter_by_week(&self.data.live_records, week, &self.tz)
            .into_iter()
            .cloned()
            .collect())
    }
}
