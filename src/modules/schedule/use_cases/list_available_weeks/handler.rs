use crate::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use crate::modules::schedule::core::grouping::merge_weeks;
use crate::modules::schedule::use_cases::application_error::ApplicationError;
use crate::shared::core::clock::{Clock, system_clock};
use crate::shared::core::iso_week::IsoWeek;
use chrono::TimeZone;
use std::sync::Arc;

/// Weeks the backend reports, plus the current week and the configured extras.
pub struct ListAvailableWeeksHandler<Tz: TimeZone> {
    api: Arc<dyn ScheduleApi>,
    extra_weeks: Vec<IsoWeek>,
    tz: Tz,
    clock: Clock,
}

impl<Tz: TimeZone> ListAvailableWeeksHandler<Tz> {
    pub fn new(api: Arc<dyn ScheduleApi>, extra_weeks: Vec<IsoWeek>, tz: Tz) -> Self {
        Self {
            api,
            extra_weeks,
            tz,
            clock: system_clock(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn current_week(&self) -> IsoWeek {
        IsoWeek::current((self.clock)(), &self.tz)
    }

    pub async fn handle(&self) -> Result<Vec<IsoWeek>, ApplicationError> {
        let reported = self.api.available_weeks().await?;
        let weeks = merge_weeks(
            reported
                .into_iter()
                .chain(std::iter::once(self.current_week()))
                .chain(self.extra_weeks.iter().copied()),
        );
        tracing::debug!(count = weeks.len(), "listed available weeks");
        Ok(weeks)
    }
}

#[cfg(test)]
mod list_available_weeks_handler_tests {
    use super::*;
    use crate::modules::schedule::adapters::outbound::schedule_api::ApiError;
    use crate::modules::schedule::adapters::outbound::schedule_api_in_memory::{
        InMemoryScheduleApi, MockSchedule,
    };
    use crate::modules::schedule::core::records::LiveRecord;
    use crate::shared::core::clock::fixed_clock;
    use crate::tests::fixtures::records::LiveRecordBuilder;
    use chrono::{FixedOffset, Utc};
    use rstest::{fixture, rstest};

    fn week(year: i32, number: u32) -> IsoWeek {
        IsoWeek::new(year, number).unwrap()
    }

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[fixture]
    fn clock() -> Clock {
        fixed_clock(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap())
    }

    fn api_with(records: Vec<LiveRecord>) -> InMemoryScheduleApi<FixedOffset> {
        let data = MockSchedule {
            live_records: records,
            ..MockSchedule::default()
        };
        InMemoryScheduleApi::new(data, tz())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_reported_current_and_extra_weeks(clock: Clock) {
        let api = api_with(vec![
            LiveRecordBuilder::new().id(1).start("2026-01-28T19:30").build(),
            LiveRecordBuilder::new().id(2).start("2026-01-29T19:30").build(),
        ])
        .with_clock(clock.clone());
        let handler = ListAvailableWeeksHandler::new(
            Arc::new(api),
            vec![week(2025, 52), week(2026, 5)],
            tz(),
        )
        .with_clock(clock);

        let weeks = handler.handle().await.unwrap();

        assert_eq!(weeks, vec![week(2025, 52), week(2026, 5), week(2026, 10)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_always_include_the_current_week(clock: Clock) {
        let api = api_with(vec![]).with_clock(clock.clone());
        let handler =
            ListAvailableWeeksHandler::new(Arc::new(api), vec![], tz()).with_clock(clock);

        let weeks = handler.handle().await.unwrap();

        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks, vec![week(2026, 10)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_api_is_offline(clock: Clock) {
        let mut api = api_with(vec![]);
        api.toggle_offline();
        let handler = ListAvailableWeeksHandler::new(Arc::new(api), vec![], tz()).with_clock(clock);

        let result = handler.handle().await;

        assert!(matches!(
            result,
            Err(ApplicationError::Api(ApiError::Unavailable {
                resource: "available_weeks",
                ..
            }))
        ));
    }
}
