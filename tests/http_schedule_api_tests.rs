// The HTTP adapter talking to the mock REST router over a real socket.

use chrono::{Utc, Weekday};
use live_schedule::modules::schedule::adapters::inbound::mock_api_http;
use live_schedule::modules::schedule::adapters::outbound::metadata_store::MetadataStore;
use live_schedule::modules::schedule::adapters::outbound::schedule_api::{ApiError, ScheduleApi};
use live_schedule::modules::schedule::adapters::outbound::schedule_api_http::HttpScheduleApi;
use live_schedule::modules::schedule::adapters::outbound::schedule_api_in_memory::InMemoryScheduleApi;
use live_schedule::modules::schedule::use_cases::get_weekly_plan::handler::GetWeeklyPlanHandler;
use live_schedule::shared::core::iso_week::IsoWeek;
use rstest::rstest;
use std::sync::Arc;

async fn serve(api: InMemoryScheduleApi<Utc>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = mock_api_http::router(Arc::new(api));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[rstest]
#[tokio::test]
async fn it_should_read_every_resource_from_the_mock_router() {
    let base_url = serve(InMemoryScheduleApi::bundled(Utc).unwrap()).await;
    let api = HttpScheduleApi::new(base_url).unwrap();

    assert_eq!(api.vups().await.unwrap().len(), 6);
    assert_eq!(api.vup_meta().await.unwrap().len(), 6);
    assert_eq!(api.live_tags().await.unwrap().len(), 9);
    assert_eq!(api.live_tag_meta().await.unwrap().len(), 9);
    assert!(
        api.available_weeks()
            .await
            .unwrap()
            .contains(&IsoWeek::new(2026, 5).unwrap())
    );

    let records = api
        .live_records_by_week(IsoWeek::new(2026, 6).unwrap())
        .await
        .unwrap();
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![12, 13]);
}

#[rstest]
#[tokio::test]
async fn it_should_map_non_success_statuses() {
    let mut offline = InMemoryScheduleApi::bundled(Utc).unwrap();
    offline.toggle_offline();
    let api = HttpScheduleApi::new(serve(offline).await).unwrap();

    let result = api.live_tags().await;

    assert_eq!(
        result,
        Err(ApiError::Status {
            resource: "live_tags",
            status: 503
        })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_build_a_weekly_plan_over_http() {
    let base_url = serve(InMemoryScheduleApi::bundled(Utc).unwrap()).await;
    let api: Arc<dyn ScheduleApi> = Arc::new(HttpScheduleApi::new(base_url).unwrap());
    let handler = GetWeeklyPlanHandler::new(api.clone(), Arc::new(MetadataStore::new(api)), Utc);

    let plan = handler.handle_year_week(2026, 5).await.unwrap();

    assert_eq!(plan.len(), 11);
    let saturday = plan.day(Weekday::Sat);
    assert_eq!(saturday.len(), 2);
    assert_eq!(saturday[1].title, "羞死了");
    assert_eq!(saturday[1].guests, vec!["贝拉".to_string()]);
}
