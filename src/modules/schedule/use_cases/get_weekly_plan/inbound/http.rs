use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::schedule::use_cases::application_error::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((year, week)): Path<(i32, u32)>,
) -> impl IntoResponse {
    match state.weekly_plan_handler.handle_year_week(year, week).await {
        Ok(plan) => Json(plan).into_response(),
        Err(ApplicationError::InvalidWeek(error)) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(ApplicationError::Api(error)) => {
            tracing::warn!(%error, year, week, "weekly plan fetch failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
