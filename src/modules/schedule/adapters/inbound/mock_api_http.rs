// REST surface of a ScheduleApi, under /api/v1.
//
// Purpose
// - Let the binary stand in for the real backend when the mock data set is configured,
//   and give the HTTP client something real to talk to in tests.

use crate::modules::schedule::adapters::outbound::schedule_api::{ApiError, ScheduleApi};
use crate::shared::core::iso_week::IsoWeek;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

type Api = Arc<dyn ScheduleApi>;

pub fn router(api: Api) -> Router {
    Router::new()
        .route("/api/v1/vup", get(vups))
        .route("/api/v1/vup_meta", get(vup_meta))
        .route("/api/v1/live_tag", get(live_tags))
        .route("/api/v1/live_tag_meta", get(live_tag_meta))
        .route(
            "/api/v1/live_records/available_weeks",
            get(available_weeks),
        )
        .route(
            "/api/v1/live_records/all/{year}/{week}",
            get(live_records_by_week),
        )
        .with_state(api)
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(error) => {
            tracing::warn!(%error, "mock api request failed");
            let status = match error {
                ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                ApiError::Status { status, .. } => {
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                ApiError::Decode { .. } => StatusCode::BAD_GATEWAY,
            };
            status.into_response()
        }
    }
}

async fn vups(State(api): State<Api>) -> Response {
    respond(api.vups().await)
}

async fn vup_meta(State(api): State<Api>) -> Response {
    respond(api.vup_meta().await)
}

async fn live_tags(State(api): State<Api>) -> Response {
    respond(api.live_tags().await)
}

async fn live_tag_meta(State(api): State<Api>) -> Response {
    respond(api.live_tag_meta().await)
}

async fn available_weeks(State(api): State<Api>) -> Response {
    respond(api.available_weeks().await)
}

async fn live_records_by_week(
    State(api): State<Api>,
    Path((year, week)): Path<(i32, u32)>,
) -> Response {
    match IsoWeek::new(year, week) {
        Ok(week) => respond(api.live_records_by_week(week).await),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}
