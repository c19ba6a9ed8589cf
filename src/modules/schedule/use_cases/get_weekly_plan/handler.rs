use crate::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use crate::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use crate::modules::schedule::core::grouping::{WeeklyGrouping, weekly_plan};
use crate::modules::schedule::core::projector::{EventProjector, MemberIndex, TypeIndex};
use crate::modules::schedule::use_cases::application_error::ApplicationError;
use crate::shared::core::iso_week::IsoWeek;
use chrono::TimeZone;
use std::sync::Arc;

pub struct GetWeeklyPlanHandler<Tz: TimeZone> {
    api: Arc<dyn ScheduleApi>,
    metadata: Arc<MetadataStore>,
    tz: Tz,
}

impl<Tz: TimeZone> GetWeeklyPlanHandler<Tz> {
    pub fn new(api: Arc<dyn ScheduleApi>, metadata: Arc<MetadataStore>, tz: Tz) -> Self {
        Self { api, metadata, tz }
    }

    /// Validates the pair before fetching anything.
    pub async fn handle_year_week(
        &self,
        year: i32,
        week: u32,
    ) -> Result<WeeklyGrouping, ApplicationError> {
        let week = IsoWeek::new(year, week)?;
        self.handle(week).await
    }

    pub async fn handle(&self, week: IsoWeek) -> Result<WeeklyGrouping, ApplicationError> {
        let (records, vups, live_tags) = tokio::try_join!(
            self.api.live_records_by_week(week),
            self.metadata.vups(),
            self.metadata.live_tags(),
        )?;

        let members = MemberIndex::from_vups(&vups);
        let types = TypeIndex::from_tags(&live_tags);
        let projector = EventProjector::new(&members, &types, self.tz.clone());
        // the backend's week filter is not trusted
        let plan = weekly_plan(&records, week, &projector);

        tracing::debug!(
            week = %week,
            fetched = records.len(),
            planned = plan.len(),
            "built weekly plan"
        );
        Ok(plan)
    }
}
