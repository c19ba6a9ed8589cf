use crate::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use crate::modules::schedule::adapters::outbound::schedule_api::ScheduleApi;
use crate::modules::schedule::adapters::outbound::schedule_api_in_memory::InMemoryScheduleApi;
use crate::modules::schedule::core::grouping::WEEKDAYS;
use crate::modules::schedule::core::tag_key::TagKey;
use crate::modules::schedule::use_cases::get_tag_catalog::handler::GetTagCatalogHandler;
use crate::modules::schedule::use_cases::get_weekly_plan::handler::GetWeeklyPlanHandler;
use crate::modules::schedule::use_cases::list_available_weeks::handler::ListAvailableWeeksHandler;
use crate::shared::core::clock::fixed_clock;
use crate::shared::core::iso_week::IsoWeek;
use chrono::{FixedOffset, TimeZone, Utc, Weekday};
use std::sync::Arc;

#[tokio::test]
async fn browses_the_bundled_schedule_week_by_week() {
    let tz = FixedOffset::east_opt(8 * 3600).unwrap();
    let clock = fixed_clock(Utc.with_ymd_and_hms(2026, 1, 28, 4, 0, 0).unwrap());
    let api: Arc<dyn ScheduleApi> = Arc::new(
        InMemoryScheduleApi::bundled(tz)
            .unwrap()
            .with_clock(clock.clone()),
    );
    let metadata = Arc::new(MetadataStore::new(api.clone()));
    let weeks_handler =
        ListAvailableWeeksHandler::new(api.clone(), vec![], tz).with_clock(clock);
    let plan_handler = GetWeeklyPlanHandler::new(api, metadata.clone(), tz);
    let catalog_handler = GetTagCatalogHandler::new(metadata);

    let weeks = weeks_handler.handle().await.unwrap();
    let current = weeks_handler.current_week();
    assert_eq!(current, IsoWeek::new(2026, 5).unwrap());
    assert!(weeks.contains(&current));

    let mut total = 0;
    for week in &weeks {
        let plan = plan_handler.handle(*week).await.unwrap();
        assert_eq!(plan.iter().count(), WEEKDAYS.len());
        for (day, events) in plan.iter() {
            assert!(events.windows(2).all(|p| p[0].time_label <= p[1].time_label));
            for event in events {
                let start = event.start_time.as_str();
                let date = chrono::NaiveDate::parse_from_str(&start[..10], "%Y-%m-%d").unwrap();
                assert_eq!(IsoWeek::of(date), *week);
                assert_eq!(chrono::Datelike::weekday(&date), day);
            }
        }
        total += plan.len();
    }
    assert_eq!(total, 15);

    let plan = plan_handler.handle(current).await.unwrap();
    let wednesday: Vec<(&str, &str)> = plan
        .day(Weekday::Wed)
        .iter()
        .map(|e| (e.time_label.as_str(), e.host.as_str()))
        .collect();
    assert_eq!(wednesday, vec![("19:30", "思诺"), ("21:00", "心宜")]);

    let catalog = catalog_handler.handle().await.unwrap();
    let sunday = plan.day(Weekday::Sun);
    assert_eq!(sunday.len(), 1);
    let labels: Vec<String> = sunday[0]
        .tag_keys
        .iter()
        .map(|&key| catalog.resolve(key).label)
        .collect();
    assert_eq!(labels, vec!["A-SOUL", "嘉然", "乃琳", "贝拉", "节目"]);
    assert!(catalog.type_tags.contains(&TagKey::Type(3)));
    assert!(!catalog.type_tags.contains(&TagKey::Type(5)));
}
