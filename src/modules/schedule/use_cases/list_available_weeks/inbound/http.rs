use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_weeks_handler.handle().await {
        Ok(weeks) => Json(weeks).into_response(),
        Err(error) => {
            tracing::warn!(%error, "listing available weeks failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
